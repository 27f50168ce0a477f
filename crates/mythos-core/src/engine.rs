//! Game core - the lifecycle state machine and main entry point

use crate::error::{LifecycleError, Result};
use crate::hooks::{HookBindings, LoadHook, RealmSwitchHook, SaveHook};
use crate::player::{PlayerController, PlayerSimulation};
use crate::realm::RealmDescriptor;
use crate::state::State;
use crate::world::{WorldGen, WorldSimulation};

/// Decides which mode the game is in and drives the world and player
/// collaborators accordingly.
///
/// Nothing works until [`GameCore::init`] has built the collaborators.
pub struct GameCore<W = WorldGen, P = PlayerController> {
    state: State,
    /// Set the first time Boot is processed; nothing reads it yet
    boot_complete: bool,
    /// State to restore on resume. Some iff `state == Pause`.
    paused_from: Option<State>,
    active_realm: RealmDescriptor,
    hooks: HookBindings,

    // Owned collaborators, rebuilt by init()
    world: Option<W>,
    player: Option<P>,
    spawn_world: Box<dyn Fn() -> W>,
    spawn_player: Box<dyn Fn() -> P>,
}

impl GameCore {
    /// Core using the stock terrain generator and player controller
    pub fn new() -> Self {
        Self::with_collaborators(WorldGen::default, PlayerController::default)
    }
}

impl Default for GameCore {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WorldSimulation, P: PlayerSimulation> GameCore<W, P> {
    /// Core whose collaborators are built by the given factories on every `init()`
    pub fn with_collaborators(
        spawn_world: impl Fn() -> W + 'static,
        spawn_player: impl Fn() -> P + 'static,
    ) -> Self {
        Self {
            state: State::Boot,
            boot_complete: false,
            paused_from: None,
            active_realm: RealmDescriptor::unloaded(),
            hooks: HookBindings::default(),
            world: None,
            player: None,
            spawn_world: Box::new(spawn_world),
            spawn_player: Box::new(spawn_player),
        }
    }

    /// Build fresh collaborators and reset to Boot. Safe to call again for
    /// a full reset; hook bindings are kept.
    pub fn init(&mut self) {
        self.world = Some((self.spawn_world)());
        self.player = Some((self.spawn_player)());
        self.state = State::Boot;
        self.boot_complete = false;
        self.paused_from = None;
        self.active_realm = RealmDescriptor::unloaded();
        log::info!("Game core initialized");
    }

    /// Advance one frame
    pub fn update(&mut self, delta_seconds: f32) -> Result<()> {
        let (Some(world), Some(player)) = (self.world.as_mut(), self.player.as_mut()) else {
            return Err(LifecycleError::NotInitialized);
        };

        match self.state {
            State::Boot => {
                self.boot_complete = true;
                self.change_state(State::MainMenu)?;
            }
            State::InWorld => {
                player.update(delta_seconds);
                world.update(delta_seconds);
            }
            // World is suspended while fighting
            State::InBattle => player.update(delta_seconds),
            State::MainMenu | State::Pause => {}
        }
        Ok(())
    }

    /// Begin a session in `realm`. `Ok(false)` if the realm was vetoed.
    pub fn start_new_game(&mut self, realm: &RealmDescriptor) -> Result<bool> {
        self.require("start_new_game", &[State::MainMenu])?;
        if !self.prepare_realm(realm)? {
            return Ok(false);
        }
        self.change_state(State::InWorld)?;
        Ok(true)
    }

    /// Resume the session stored in `slot` through the load hook
    pub fn request_load(&mut self, slot: &str) -> Result<bool> {
        self.require("request_load", &[State::MainMenu])?;

        let loaded = match self.hooks.load.as_mut() {
            Some(hook) => hook.load(slot),
            None => {
                log::warn!("Load of slot '{}' requested with no load hook bound", slot);
                return Ok(false);
            }
        };
        let realm = match loaded {
            Some(realm) => realm,
            None => return Ok(false),
        };

        if !self.prepare_realm(&realm)? {
            return Ok(false);
        }
        self.change_state(State::InWorld)?;
        Ok(true)
    }

    /// Hand the current session to the save hook and return its verdict
    pub fn request_save(&mut self, slot: &str) -> Result<bool> {
        self.require(
            "request_save",
            &[State::MainMenu, State::InWorld, State::Pause],
        )?;

        match self.hooks.save.as_mut() {
            Some(hook) => Ok(hook.save(slot, &self.active_realm, self.state)),
            None => {
                log::warn!("Save to slot '{}' requested with no save hook bound", slot);
                Ok(false)
            }
        }
    }

    pub fn enter_battle(&mut self) -> Result<()> {
        self.require("enter_battle", &[State::InWorld])?;
        self.change_state(State::InBattle)
    }

    pub fn conclude_battle(&mut self) -> Result<()> {
        self.require("conclude_battle", &[State::InBattle])?;
        self.change_state(State::InWorld)
    }

    /// Pause from the world or a battle. Pausing while paused does nothing.
    pub fn pause(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        if self.state == State::Pause {
            return Ok(());
        }
        self.require("pause", &[State::InWorld, State::InBattle])?;
        self.paused_from = Some(self.state);
        self.change_state(State::Pause)
    }

    /// Return to whatever was paused
    pub fn resume(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        let resume_to = match (self.state, self.paused_from) {
            (State::Pause, Some(previous)) => previous,
            (state, _) => {
                return Err(LifecycleError::PreconditionViolation {
                    operation: "resume",
                    state,
                })
            }
        };
        self.change_state(resume_to)
    }

    pub fn return_to_menu(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        if self.state == State::MainMenu {
            return Ok(());
        }
        self.require("return_to_menu", &[State::InWorld, State::Pause])?;
        self.change_state(State::MainMenu)
    }

    /// Swap realms without leaving the current mode
    pub fn request_realm_switch(&mut self, realm: &RealmDescriptor) -> Result<bool> {
        self.require("request_realm_switch", &[State::InWorld, State::Pause])?;
        self.prepare_realm(realm)
    }

    pub fn set_save_hook(&mut self, hook: impl SaveHook + 'static) {
        self.hooks.save = Some(Box::new(hook));
    }

    pub fn set_load_hook(&mut self, hook: impl LoadHook + 'static) {
        self.hooks.load = Some(Box::new(hook));
    }

    pub fn set_realm_switch_hook(&mut self, hook: impl RealmSwitchHook + 'static) {
        self.hooks.realm_switch = Some(Box::new(hook));
    }

    pub fn clear_save_hook(&mut self) {
        self.hooks.save = None;
    }

    pub fn clear_load_hook(&mut self) {
        self.hooks.load = None;
    }

    /// Realm switches are approved by default again
    pub fn clear_realm_switch_hook(&mut self) {
        self.hooks.realm_switch = None;
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Sentinel until the first accepted realm
    pub fn active_realm(&self) -> &RealmDescriptor {
        &self.active_realm
    }

    pub fn is_pause_active(&self) -> bool {
        self.state == State::Pause
    }

    pub fn paused_from(&self) -> Option<State> {
        self.paused_from
    }

    pub fn is_boot_complete(&self) -> bool {
        self.boot_complete
    }

    pub fn is_initialized(&self) -> bool {
        self.world.is_some() && self.player.is_some()
    }

    pub fn world(&self) -> Option<&W> {
        self.world.as_ref()
    }

    pub fn player(&self) -> Option<&P> {
        self.player.as_ref()
    }

    /// Apply a guarded transition. Setting the current state is a no-op.
    fn change_state(&mut self, to: State) -> Result<()> {
        let from = self.state;
        if from == to {
            return Ok(());
        }
        if !from.can_transition_to(to) {
            return Err(LifecycleError::InvalidTransition { from, to });
        }

        self.state = to;
        if to != State::Pause {
            self.paused_from = None;
        }
        log::info!("State {} -> {}", from, to);
        Ok(())
    }

    /// Ask for approval, then commit the realm and regenerate the world.
    /// The hook runs exactly once; a veto leaves everything untouched.
    fn prepare_realm(&mut self, realm: &RealmDescriptor) -> Result<bool> {
        let world = self.world.as_mut().ok_or(LifecycleError::NotInitialized)?;

        if !self.hooks.approve_realm(realm) {
            log::warn!("Realm switch to {} rejected", realm);
            return Ok(false);
        }

        self.active_realm = realm.clone();
        world.generate(&self.active_realm);
        log::info!("Active realm is now {}", self.active_realm);
        Ok(true)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(LifecycleError::NotInitialized)
        }
    }

    fn require(&self, operation: &'static str, allowed: &[State]) -> Result<()> {
        self.ensure_initialized()?;
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(LifecycleError::PreconditionViolation {
                operation,
                state: self.state,
            })
        }
    }
}
