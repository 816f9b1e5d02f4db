//! Household system — sessions, registration, scenes and energy use-cases.

use homesphere_domain::error::{AuthError, HomeSphereError, NotFoundError};
use homesphere_domain::household::Household;
use homesphere_domain::id::{SceneId, UserId};
use homesphere_domain::time::Timestamp;
use homesphere_domain::user::User;

use crate::dispatcher::ActionDispatcher;
use crate::ports::EventPublisher;
use crate::reporting::{EnergyReading, energy_report};
use crate::scene_engine::{SceneEngine, SceneReport};

/// Application service owning one household and its login session.
pub struct HomeSphereSystem<P> {
    household: Household,
    current_user: Option<UserId>,
    engine: SceneEngine<'static, P>,
}

impl<P: EventPublisher> HomeSphereSystem<P> {
    /// Create a system over `household` using the standard command registry.
    pub fn new(household: Household, publisher: P) -> Self {
        Self::with_engine(
            household,
            SceneEngine::new(ActionDispatcher::default(), publisher),
        )
    }

    pub fn with_engine(household: Household, engine: SceneEngine<'static, P>) -> Self {
        Self {
            household,
            current_user: None,
            engine,
        }
    }

    #[must_use]
    pub fn household(&self) -> &Household {
        &self.household
    }

    pub fn household_mut(&mut self) -> &mut Household {
        &mut self.household
    }

    #[must_use]
    pub fn engine(&self) -> &SceneEngine<'static, P> {
        &self.engine
    }

    /// Start a session for the user matching both credentials.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Authentication`] when no user matches; the
    /// current session is left unchanged.
    #[tracing::instrument(skip(self, password))]
    pub fn login(&mut self, login_name: &str, password: &str) -> Result<&User, HomeSphereError> {
        let Some(user) = self
            .household
            .users()
            .iter()
            .find(|u| u.matches_credentials(login_name, password))
        else {
            tracing::warn!("login rejected");
            return Err(AuthError::InvalidCredentials.into());
        };
        tracing::info!(user_id = %user.id, "user logged in");
        self.current_user = Some(user.id);
        Ok(user)
    }

    /// End the current session, if any.
    pub fn logoff(&mut self) {
        if let Some(user_id) = self.current_user.take() {
            tracing::info!(%user_id, "user logged off");
        }
    }

    /// The logged-in user. `None` after logoff or if the user was removed.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.and_then(|id| self.household.user(id))
    }

    /// Register a new non-admin user with the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `login_name` is empty or
    /// no user ids are left.
    #[tracing::instrument(skip(self, password, user_name, email))]
    pub fn register(
        &mut self,
        login_name: &str,
        password: &str,
        user_name: &str,
        email: &str,
    ) -> Result<User, HomeSphereError> {
        let user = User::builder()
            .id(self.household.next_user_id()?)
            .login_name(login_name)
            .login_password(password)
            .user_name(user_name)
            .email(email)
            .build()?;
        self.household.add_user(user.clone())?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Energy readings for every energy-reporting device in the household.
    #[must_use]
    pub fn energy_report(&self, start: Timestamp, end: Timestamp) -> Vec<EnergyReading> {
        energy_report(&self.household.list_all_devices(), start, end)
    }

    /// Run the scene with `scene_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::NotFound`] when no scene has that id.
    /// Per-action failures are reported in the [`SceneReport`] instead.
    #[tracing::instrument(skip(self))]
    pub fn trigger_scene(&self, scene_id: SceneId) -> Result<SceneReport, HomeSphereError> {
        let scene = self.household.scene(scene_id).ok_or_else(|| NotFoundError {
            entity: "Scene",
            id: scene_id.to_string(),
        })?;
        Ok(self.engine.trigger(scene))
    }
}
