//! Higher-order combinators that every transform and generator is assembled from.
//!
//! **Application order:** [`compose!`](crate::compose) applies its arguments *left to right*,
//! `compose!(f, g, h)(x) == h(g(f(x)))`. This is the reverse of the mathematical `h ∘ g ∘ f`,
//! and the pipelines in [`crate::image`] are written in this order: convert the point first,
//! remap it next, sample the source image last.
//!
//! [`lift!`](crate::lift) spreads one input through several extractors and feeds the results
//! positionally into a combiner: `lift!(h, f1, f2)(x) == h(f1(x), f2(x))`.
//!
//! Rust has no variadic generics, so the macros expand into the fixed-arity functions below.
//! Closures passed to the macros should have annotated parameter types: the nested calls are
//! type-checked before the outer stages, so the input type is not always known in advance.


pub fn identity<X>() -> impl Fn(X) -> X + Clone {
  |x| x
}

/// `compose(f, g)(x) == g(f(x))`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
  move |x| g(f(x))
}

/// `lift1(h, f)(x) == h(f(x))`.
pub fn lift1<X, A, R>(h: impl Fn(A) -> R, f: impl Fn(X) -> A) -> impl Fn(X) -> R {
  move |x| h(f(x))
}

/// `lift2(h, f1, f2)(x) == h(f1(x), f2(x))`.
pub fn lift2<X: Clone, A, B, R>(
  h: impl Fn(A, B) -> R,
  f1: impl Fn(X) -> A,
  f2: impl Fn(X) -> B
) -> impl Fn(X) -> R {
  move |x| h(f1(x.clone()), f2(x))
}

/// `lift3(h, f1, f2, f3)(x) == h(f1(x), f2(x), f3(x))`.
pub fn lift3<X: Clone, A, B, C, R>(
  h: impl Fn(A, B, C) -> R,
  f1: impl Fn(X) -> A,
  f2: impl Fn(X) -> B,
  f3: impl Fn(X) -> C
) -> impl Fn(X) -> R {
  move |x| h(f1(x.clone()), f2(x.clone()), f3(x))
}

/// Left-to-right pipeline of unary functions. With no arguments, the identity.
///
/// ```
/// use functional_images::compose;
///
/// let f = compose!(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(f(3), 8);
/// assert_eq!(compose!()("unchanged"), "unchanged");
/// ```
#[macro_export]
macro_rules! compose {
  () => { $crate::functional::identity() };
  ($f: expr $(,)?) => {
    $crate::functional::compose($crate::functional::identity(), $f)
  };
  ($f: expr, $($rest: expr),+ $(,)?) => {
    $crate::functional::compose($f, $crate::compose!($($rest),+))
  };
}

/// Spreads one input through up to three extractors into a combiner.
/// `lift!(h)` forwards its argument to `h` unchanged.
///
/// ```
/// use functional_images::lift;
///
/// let norm1 = lift!(|a: f64, b: f64| a.abs() + b.abs(), |p: (f64, f64)| p.0, |p: (f64, f64)| p.1);
/// assert_eq!(norm1((3.0, -4.0)), 7.0);
/// ```
#[macro_export]
macro_rules! lift {
  ($h: expr $(,)?) => {
    $crate::functional::lift1($h, $crate::functional::identity())
  };
  ($h: expr, $f1: expr $(,)?) => {
    $crate::functional::lift1($h, $f1)
  };
  ($h: expr, $f1: expr, $f2: expr $(,)?) => {
    $crate::functional::lift2($h, $f1, $f2)
  };
  ($h: expr, $f1: expr, $f2: expr, $f3: expr $(,)?) => {
    $crate::functional::lift3($h, $f1, $f2, $f3)
  };
}
