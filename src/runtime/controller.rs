//! Screen lifecycle around an [`EventLoop`]: keeps the model while stopped so it can be
//! restored on the next start.

use std::sync::Arc;

use tracing::debug;

use crate::error::TaskloopError;

use super::effects::EffectRouter;
use super::event_loop::EventLoop;
use super::next::Logic;

pub struct Controller<L: Logic> {
    router: Arc<dyn EffectRouter<L::Effect, L::Event>>,
    saved: L::Model,
    running: Option<EventLoop<L>>,
}

impl<L: Logic> Controller<L> {
    pub fn new(model: L::Model, router: Arc<dyn EffectRouter<L::Effect, L::Event>>) -> Self {
        Self {
            router,
            saved: model,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Current model: live while running, the last saved value otherwise.
    pub fn model(&self) -> L::Model {
        match &self.running {
            Some(lp) => lp.model(),
            None => self.saved.clone(),
        }
    }

    /// Replace the model to start from, e.g. after restoring persisted state.
    pub fn replace_model(&mut self, model: L::Model) -> Result<(), TaskloopError> {
        if self.running.is_some() {
            return Err(TaskloopError::validation(
                "Cannot replace the model of a running loop",
            ));
        }
        self.saved = model;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), TaskloopError> {
        if self.running.is_some() {
            return Err(TaskloopError::validation("Loop is already running"));
        }
        debug!("starting controller loop");
        self.running = Some(EventLoop::start(
            self.saved.clone(),
            Arc::clone(&self.router),
        ));
        Ok(())
    }

    pub async fn stop(&mut self) {
        if let Some(lp) = self.running.take() {
            self.saved = lp.stop().await;
        }
    }

    /// Events sent while stopped are rejected, not buffered.
    pub fn dispatch_event(&self, event: L::Event) -> Result<(), TaskloopError> {
        match &self.running {
            Some(lp) => lp.dispatch_event(event),
            None => Err(TaskloopError::loop_not_running()),
        }
    }

    pub async fn settle(&self) {
        if let Some(lp) = &self.running {
            lp.settle().await;
        }
    }

    pub fn take_errors(&self) -> Vec<TaskloopError> {
        self.running
            .as_ref()
            .map(EventLoop::take_errors)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::ErrorCode;
    use crate::runtime::effects::Dispatch;
    use crate::runtime::next::{First, Next};

    struct Toggle;

    #[derive(Debug)]
    enum Flip {
        Flip,
    }

    #[derive(Debug)]
    enum NoEffect {}

    impl Logic for Toggle {
        type Model = bool;
        type Event = Flip;
        type Effect = NoEffect;

        fn init(model: bool) -> First<bool, NoEffect> {
            First::first(model)
        }

        fn update(model: &bool, event: Flip) -> Result<Next<bool, NoEffect>, TaskloopError> {
            match event {
                Flip::Flip => Ok(Next::next(!model)),
            }
        }
    }

    struct NoRoutes;

    impl EffectRouter<NoEffect, Flip> for NoRoutes {
        fn route(&self, effect: NoEffect) -> Dispatch<Flip> {
            match effect {}
        }
    }

    #[tokio::test]
    async fn model_survives_stop_and_restart() {
        let mut controller = Controller::<Toggle>::new(false, Arc::new(NoRoutes));
        controller.start().unwrap();
        controller.dispatch_event(Flip::Flip).unwrap();
        controller.settle().await;
        controller.stop().await;
        assert!(!controller.is_running());
        assert!(controller.model());

        controller.start().unwrap();
        controller.dispatch_event(Flip::Flip).unwrap();
        controller.settle().await;
        assert!(!controller.model());
        controller.stop().await;
    }

    #[tokio::test]
    async fn events_while_stopped_are_rejected() {
        let controller = Controller::<Toggle>::new(false, Arc::new(NoRoutes));
        let err = controller.dispatch_event(Flip::Flip).unwrap_err();
        assert_eq!(err.code, ErrorCode::LoopNotRunning);
    }

    #[tokio::test]
    async fn replace_model_only_when_stopped() {
        let mut controller = Controller::<Toggle>::new(false, Arc::new(NoRoutes));
        controller.replace_model(true).unwrap();
        controller.start().unwrap();
        assert_matches!(controller.replace_model(false), Err(_));
        assert_matches!(controller.start(), Err(_));
        assert!(controller.model());
        controller.stop().await;
    }
}
