//! The event loop: a single tokio task that owns the model and serializes `update`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::StreamExt;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot, watch, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::TaskloopError;

use super::effects::{Dispatch, EffectRouter, UiAction};
use super::next::{First, Logic};

/// Counts queued events, running effects and queued UI actions.
#[derive(Default)]
struct Pending {
    count: AtomicUsize,
    idle: Notify,
}

impl Pending {
    fn acquire(self: &Arc<Self>) -> PendingGuard {
        let _ = self.count.fetch_add(1, Ordering::SeqCst);
        PendingGuard(Arc::clone(self))
    }

    async fn settle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            let _ = notified.as_mut().enable();
            if self.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// RAII: released when the unit of work it tracks is finished.
struct PendingGuard(Arc<Pending>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

struct Envelope<E> {
    event: E,
    _guard: PendingGuard,
}

type UiJob = (UiAction, PendingGuard);

struct Dispatcher<E> {
    events: mpsc::UnboundedSender<Envelope<E>>,
    ui: mpsc::UnboundedSender<UiJob>,
    pending: Arc<Pending>,
}

impl<E: Send + 'static> Dispatcher<E> {
    fn dispatch(&self, dispatch: Dispatch<E>) {
        let guard = self.pending.acquire();
        match dispatch {
            Dispatch::Action(action) => {
                if self.ui.send((action, guard)).is_err() {
                    warn!("ui context closed; dropping action");
                }
            }
            Dispatch::Function(fut) => {
                let events = self.events.clone();
                let pending = Arc::clone(&self.pending);
                drop(tokio::spawn(async move {
                    let event = fut.await;
                    feed(&events, &pending, event);
                    drop(guard);
                }));
            }
            Dispatch::Transformer(mut stream) => {
                let events = self.events.clone();
                let pending = Arc::clone(&self.pending);
                drop(tokio::spawn(async move {
                    while let Some(event) = stream.next().await {
                        feed(&events, &pending, event);
                    }
                    drop(guard);
                }));
            }
        }
    }
}

fn feed<E>(events: &mpsc::UnboundedSender<Envelope<E>>, pending: &Arc<Pending>, event: E) {
    let envelope = Envelope {
        event,
        _guard: pending.acquire(),
    };
    if events.send(envelope).is_err() {
        debug!("loop stopped; dropping follow-up event");
    }
}

/// A running loop for one screen.
pub struct EventLoop<L: Logic> {
    events: mpsc::UnboundedSender<Envelope<L::Event>>,
    model: watch::Receiver<L::Model>,
    errors: Arc<Mutex<Vec<TaskloopError>>>,
    pending: Arc<Pending>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    ui_task: JoinHandle<()>,
}

impl<L: Logic> EventLoop<L> {
    /// Runs `init` on `model` and starts consuming events. Must be called inside a tokio runtime.
    pub fn start(model: L::Model, router: Arc<dyn EffectRouter<L::Effect, L::Event>>) -> Self {
        let First { model, effects } = L::init(model);

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (model_tx, model_rx) = watch::channel(model.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let pending = Arc::new(Pending::default());
        let errors = Arc::new(Mutex::new(Vec::new()));

        let dispatcher = Dispatcher {
            events: events_tx.clone(),
            ui: ui_tx,
            pending: Arc::clone(&pending),
        };
        for effect in effects {
            debug!(?effect, "dispatching init effect");
            dispatcher.dispatch(router.route(effect));
        }

        let ui_task = tokio::spawn(run_ui(ui_rx));
        let task = tokio::spawn(run_loop::<L>(
            model,
            events_rx,
            shutdown_rx,
            model_tx,
            dispatcher,
            router,
            Arc::clone(&errors),
        ));
        info!("event loop started");

        Self {
            events: events_tx,
            model: model_rx,
            errors,
            pending,
            shutdown: Some(shutdown_tx),
            task,
            ui_task,
        }
    }

    /// Queue an event. Events are processed strictly in arrival order.
    pub fn dispatch_event(&self, event: L::Event) -> Result<(), TaskloopError> {
        let envelope = Envelope {
            event,
            _guard: self.pending.acquire(),
        };
        self.events
            .send(envelope)
            .map_err(|_| TaskloopError::loop_not_running())
    }

    pub fn model(&self) -> L::Model {
        self.model.borrow().clone()
    }

    pub fn observe(&self) -> watch::Receiver<L::Model> {
        self.model.clone()
    }

    /// Resolves once no events, effects or UI actions are outstanding.
    pub async fn settle(&self) {
        self.pending.settle().await;
    }

    /// Drain invariant violations reported since the last call.
    pub fn take_errors(&self) -> Vec<TaskloopError> {
        std::mem::take(&mut *self.errors.lock())
    }

    /// Stop consuming events and hand back the last model. In-flight effects are not
    /// cancelled; their events are dropped.
    pub async fn stop(mut self) -> L::Model {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            warn!(error = %e, "event loop task ended abnormally");
        }
        if let Err(e) = (&mut self.ui_task).await {
            warn!(error = %e, "ui context ended abnormally");
        }
        info!("event loop stopped");
        let model = self.model.borrow().clone();
        model
    }
}

async fn run_ui(mut jobs: mpsc::UnboundedReceiver<UiJob>) {
    while let Some((action, _guard)) = jobs.recv().await {
        action();
    }
}

async fn run_loop<L: Logic>(
    mut model: L::Model,
    mut events: mpsc::UnboundedReceiver<Envelope<L::Event>>,
    mut shutdown: oneshot::Receiver<()>,
    model_tx: watch::Sender<L::Model>,
    dispatcher: Dispatcher<L::Event>,
    router: Arc<dyn EffectRouter<L::Effect, L::Event>>,
    errors: Arc<Mutex<Vec<TaskloopError>>>,
) {
    loop {
        let envelope = tokio::select! {
            biased;
            _ = &mut shutdown => break,
            envelope = events.recv() => match envelope {
                Some(envelope) => envelope,
                None => break,
            },
        };
        let Envelope { event, _guard } = envelope;
        debug!(?event, "event received");

        match L::update(&model, event) {
            Ok(next) => {
                let (new_model, effects) = next.into_parts();
                if let Some(new_model) = new_model {
                    model = new_model;
                    let _ = model_tx.send_replace(model.clone());
                }
                for effect in effects {
                    debug!(?effect, "dispatching effect");
                    dispatcher.dispatch(router.route(effect));
                }
            }
            Err(e) => {
                error!(code = e.code.as_str(), bug = e.code.is_bug(), error = %e, "update rejected event");
                errors.lock().push(e);
            }
        }
    }
}
