use super::Transformer;

/// Leaves a function object unchanged.
///
/// `Apply<Identity, F>` is `F` itself, which makes `Identity` the neutral
/// element of [`Compose`](super::Compose).
///
/// # Examples
///
/// ```
/// use optimus::function::Plus;
/// use optimus::transform::{Apply, Identity};
///
/// let plus: Apply<Identity, Plus<i32>> = Plus::new();
/// # let _ = plus;
/// ```
pub enum Identity {}

impl Transformer for Identity {
    type Apply<F> = F;

    #[inline]
    fn wrap<F>(inner: F) -> F {
        inner
    }
}
