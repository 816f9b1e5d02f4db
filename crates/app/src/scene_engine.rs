//! Scene engine — runs every action of a scene and reports per-action
//! outcomes.
//!
//! A failing action never stops the scene: remaining actions still run, and
//! the failure is logged, published as [`EventType::ActionFailed`] and kept
//! in the [`SceneReport`].

use homesphere_domain::event::{Event, EventType};
use homesphere_domain::id::SceneId;
use homesphere_domain::scene::Scene;

use crate::dispatcher::{ActionDispatcher, ActionOutcome};
use crate::ports::EventPublisher;

/// Per-action results of one scene trigger, in action order.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneReport {
    pub scene_id: SceneId,
    pub scene_name: String,
    pub outcomes: Vec<ActionOutcome>,
}

impl SceneReport {
    /// Number of actions that were applied.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Outcomes of actions that could not be applied, in action order.
    pub fn failures(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ActionOutcome::is_success)
    }
}

/// Executes scenes through an [`ActionDispatcher`] and announces progress
/// on an [`EventPublisher`].
pub struct SceneEngine<'r, P> {
    dispatcher: ActionDispatcher<'r>,
    publisher: P,
}

impl<'r, P: EventPublisher> SceneEngine<'r, P> {
    /// Create a new engine.
    pub fn new(dispatcher: ActionDispatcher<'r>, publisher: P) -> Self {
        Self {
            dispatcher,
            publisher,
        }
    }

    #[must_use]
    pub fn dispatcher(&self) -> &ActionDispatcher<'r> {
        &self.dispatcher
    }

    #[must_use]
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Dispatch every action of `scene` in insertion order.
    ///
    /// A scene without actions completes immediately with an empty report.
    pub fn trigger(&self, scene: &Scene) -> SceneReport {
        let scene_id = scene.id();
        tracing::info!(
            %scene_id,
            scene = scene.name(),
            actions = scene.actions().len(),
            "triggering scene"
        );
        // Fire-and-forget
        let _ = self.publisher.publish(Event::new(
            EventType::SceneTriggered,
            Some(scene_id),
            None,
            serde_json::json!({ "scene_name": scene.name() }),
        ));

        let outcomes = scene
            .actions()
            .iter()
            .map(|action| {
                let outcome = self.dispatcher.execute(action);
                self.announce(scene_id, &outcome);
                outcome
            })
            .collect();

        SceneReport {
            scene_id,
            scene_name: scene.name().to_string(),
            outcomes,
        }
    }

    fn announce(&self, scene_id: SceneId, outcome: &ActionOutcome) {
        let event = match &outcome.result {
            Ok(()) => {
                tracing::debug!(
                    %scene_id,
                    device_id = %outcome.device_id,
                    command = %outcome.command,
                    "action executed"
                );
                Event::new(
                    EventType::ActionExecuted,
                    Some(scene_id),
                    Some(outcome.device_id),
                    serde_json::json!({
                        "command": outcome.command,
                        "parameter": outcome.parameter,
                    }),
                )
            }
            Err(err) => {
                tracing::warn!(
                    %scene_id,
                    device_id = %outcome.device_id,
                    command = %outcome.command,
                    error = %err,
                    "action failed"
                );
                Event::new(
                    EventType::ActionFailed,
                    Some(scene_id),
                    Some(outcome.device_id),
                    serde_json::json!({
                        "command": outcome.command,
                        "parameter": outcome.parameter,
                        "reason": err.to_string(),
                    }),
                )
            }
        };
        let _ = self.publisher.publish(event);
    }
}
