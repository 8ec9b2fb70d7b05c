//! Function composition.
//!
//! Two forms are provided. The [`pipe!`](crate::pipe) and
//! [`compose!`](crate::compose) macros chain closures of any types, checked
//! at compile time. The [`pipe`] and [`compose`] functions take a runtime
//! list of same-typed transforms, which suits chains assembled from data.

/// A boxed `T -> T` transform, the unit of a runtime chain.
pub type Transform<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Chains transforms left to right: `pipe([f, g, h])(x) == h(g(f(x)))`.
///
/// An empty chain is the identity.
///
/// # Examples
/// ```
/// use listkit::compose::{pipe, Transform};
///
/// let stages: Vec<Transform<i32>> = vec![
///     Box::new(|x: i32| x * 2),
///     Box::new(|x: i32| x - 1),
///     Box::new(|x: i32| x * 3),
/// ];
/// let math = pipe(stages);
///
/// assert_eq!([1, 2, 3].map(&math), [3, 9, 15]);
/// ```
pub fn pipe<'a, T: 'a>(functions: Vec<Transform<'a, T>>) -> impl Fn(T) -> T + 'a {
    move |initial| functions.iter().fold(initial, |value, f| f(value))
}

/// Chains transforms right to left: `compose([f, g, h])(x) == f(g(h(x)))`.
///
/// An empty chain is the identity.
///
/// # Examples
/// ```
/// use listkit::compose::{compose, Transform};
///
/// let stages: Vec<Transform<i32>> = vec![
///     Box::new(|x: i32| x * 2),
///     Box::new(|x: i32| x - 1),
///     Box::new(|x: i32| x * 3),
/// ];
/// let math = compose(stages);
///
/// assert_eq!([1, 2, 3].map(&math), [4, 10, 16]);
/// ```
pub fn compose<'a, T: 'a>(functions: Vec<Transform<'a, T>>) -> impl Fn(T) -> T + 'a {
    move |initial| functions.iter().rfold(initial, |value, f| f(value))
}

/// Composes closures left to right into a single closure.
///
/// Each stage may change the value's type. With no stages the result is
/// the identity closure.
///
/// # Examples
/// ```
/// use listkit::pipe;
///
/// let shout = pipe!(str::trim, str::to_uppercase, |s: String| s + "!");
/// assert_eq!(shout("  hi "), "HI!");
///
/// let same = pipe!();
/// assert_eq!(same(7), 7);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        |x| x
    };
    ($f:expr $(,)?) => {{
        let f = $f;
        move |x| f(x)
    }};
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let f = $f;
        let rest = $crate::pipe!($($rest),+);
        move |x| rest(f(x))
    }};
}

/// Composes closures right to left into a single closure.
///
/// `compose!(f, g)(x) == f(g(x))`. With no stages the result is the
/// identity closure.
///
/// # Examples
/// ```
/// use listkit::compose;
///
/// let describe = compose!(|n: usize| format!("{n} chars"), str::len);
/// assert_eq!(describe("hello"), "5 chars");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        |x| x
    };
    ($f:expr $(,)?) => {{
        let f = $f;
        move |x| f(x)
    }};
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let f = $f;
        let rest = $crate::compose!($($rest),+);
        move |x| f(rest(x))
    }};
}
