//! Effect dispatch classes and the per-screen router seam.

use std::future::Future;

use futures::future::BoxFuture;
use futures::stream::{BoxStream, Stream};
use futures::{FutureExt, StreamExt};

/// Work scheduled on the UI context.
pub type UiAction = Box<dyn FnOnce() + Send + 'static>;

/// How a single effect is resolved.
pub enum Dispatch<E> {
    /// Fire-and-forget on the UI context. Produces no event.
    Action(UiAction),
    /// Runs off the loop and produces exactly one event.
    Function(BoxFuture<'static, E>),
    /// Runs off the loop and produces zero or more events.
    Transformer(BoxStream<'static, E>),
}

impl<E> Dispatch<E> {
    pub fn action(f: impl FnOnce() + Send + 'static) -> Self {
        Self::Action(Box::new(f))
    }

    pub fn function<Fut>(fut: Fut) -> Self
    where
        Fut: Future<Output = E> + Send + 'static,
    {
        Self::Function(fut.boxed())
    }

    pub fn transformer<S>(stream: S) -> Self
    where
        S: Stream<Item = E> + Send + 'static,
    {
        Self::Transformer(stream.boxed())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Action(_) => "action",
            Self::Function(_) => "function",
            Self::Transformer(_) => "transformer",
        }
    }
}

impl<E> std::fmt::Debug for Dispatch<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Dispatch").field(&self.kind()).finish()
    }
}

/// Maps every effect of a screen to its dispatch class.
///
/// `route` runs on the loop task and must not block; the real work belongs in the
/// returned future or stream.
pub trait EffectRouter<F, E>: Send + Sync + 'static {
    fn route(&self, effect: F) -> Dispatch<E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_each_class() {
        assert_eq!(Dispatch::<u8>::action(|| {}).kind(), "action");
        assert_eq!(Dispatch::function(async { 1u8 }).kind(), "function");
        assert_eq!(
            Dispatch::transformer(futures::stream::iter(vec![1u8, 2])).kind(),
            "transformer"
        );
    }
}
