use std::fmt::Debug;

use crate::error::TaskloopError;

/// Result of `update`: an optional new model plus the effects to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Next<M, F> {
    model: Option<M>,
    effects: Vec<F>,
}

impl<M, F> Next<M, F> {
    pub fn next(model: M) -> Self {
        Self {
            model: Some(model),
            effects: Vec::new(),
        }
    }

    pub fn next_with(model: M, effects: Vec<F>) -> Self {
        Self {
            model: Some(model),
            effects,
        }
    }

    /// Effects only, model unchanged.
    pub fn dispatch(effects: Vec<F>) -> Self {
        Self {
            model: None,
            effects,
        }
    }

    pub fn no_change() -> Self {
        Self {
            model: None,
            effects: Vec::new(),
        }
    }

    pub fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn effects(&self) -> &[F] {
        &self.effects
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn into_parts(self) -> (Option<M>, Vec<F>) {
        (self.model, self.effects)
    }
}

/// Result of `init`: the starting model and any effects to kick off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct First<M, F> {
    pub model: M,
    pub effects: Vec<F>,
}

impl<M, F> First<M, F> {
    pub fn first(model: M) -> Self {
        Self {
            model,
            effects: Vec::new(),
        }
    }

    pub fn first_with(model: M, effects: Vec<F>) -> Self {
        Self { model, effects }
    }
}

/// One screen's state machine. Both functions are pure and synchronous.
pub trait Logic: Send + Sync + 'static {
    type Model: Debug + Clone + Send + Sync + 'static;
    type Event: Debug + Send + 'static;
    type Effect: Debug + Send + 'static;

    /// Called once when a loop starts from `model`.
    fn init(model: Self::Model) -> First<Self::Model, Self::Effect> {
        First::first(model)
    }

    /// Errors are reserved for invariant violations; recoverable failures arrive as events.
    fn update(
        model: &Self::Model,
        event: Self::Event,
    ) -> Result<Next<Self::Model, Self::Effect>, TaskloopError>;
}
