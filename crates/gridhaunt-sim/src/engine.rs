//! Simulation engine: the composition root and per-tick loop.
//!
//! `SimulationEngine` owns the topology, both agent pools, the collision
//! resolver, the soul economy and the portals, processes player commands at
//! tick boundaries, and produces `SimSnapshot`s. Completely headless; the
//! host supplies `dt` once per frame.
//!
//! Tick order while a level is active:
//! 1. move ghosts, then humans (arrivals recorded by the resolver);
//! 2. once every agent has landed: resolve collisions, apply destroy
//!    intents, queue spawn intents, drain the ghost spawn queue, and signal
//!    the next move;
//! 3. regenerate souls;
//! 4. end the level when either population reaches zero.

use std::collections::VecDeque;

use gridhaunt_core::commands::PlayerCommand;
use gridhaunt_core::config::{validate_move_duration, ConfigError, LevelConfig};
use gridhaunt_core::constants::{DEFAULT_MOVE_DURATION, DEFAULT_SEED};
use gridhaunt_core::enums::{AgentKind, GamePhase};
use gridhaunt_core::events::SimEvent;
use gridhaunt_core::state::SimSnapshot;
use gridhaunt_core::types::SimTime;
use gridhaunt_grid::{GridTopology, TileMap};

use crate::collision::{CollisionOutcome, CollisionResolver};
use crate::economy::SoulEconomy;
use crate::levels::Campaign;
use crate::pool::AgentPool;
use crate::portal::{PortalActivation, PortalBank};
use crate::snapshot;

/// Configuration for a simulation session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Global seed. Same seed + same inputs = same simulation.
    pub seed: i64,
    /// Seconds for an agent to cross one cell.
    pub move_duration: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            move_duration: DEFAULT_MOVE_DURATION,
        }
    }
}

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    campaign: Campaign,
    level: Option<LevelConfig>,
    /// Position of the loaded level in `campaign`; `None` for ad-hoc levels.
    campaign_position: Option<usize>,
    phase: GamePhase,
    time: SimTime,
    begin_move: bool,

    topology: GridTopology,
    ghosts: AgentPool,
    humans: AgentPool,
    resolver: CollisionResolver,
    economy: SoulEconomy,
    portals: PortalBank,

    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Engine over the built-in campaign.
    pub fn new(config: SimConfig) -> Self {
        Self::with_campaign(config, Campaign::builtin())
    }

    pub fn with_campaign(config: SimConfig, campaign: Campaign) -> Self {
        Self {
            config,
            campaign,
            level: None,
            campaign_position: None,
            phase: GamePhase::default(),
            time: SimTime::default(),
            begin_move: true,
            topology: GridTopology::new(),
            ghosts: AgentPool::new(AgentKind::Ghost),
            humans: AgentPool::new(AgentKind::Human),
            resolver: CollisionResolver::new(),
            economy: SoulEconomy::default(),
            portals: PortalBank::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Load campaign level `index`. On error nothing changes.
    pub fn start_level(&mut self, index: usize) -> Result<(), ConfigError> {
        let level = self.campaign.get(index)?.clone();
        self.load(level, Some(index))
    }

    /// Load an arbitrary level outside the campaign. Validates first; on
    /// error nothing changes. Reported under the level's own `index`.
    pub fn load_level(&mut self, level: LevelConfig) -> Result<(), ConfigError> {
        self.load(level, None)
    }

    fn load(
        &mut self,
        level: LevelConfig,
        campaign_position: Option<usize>,
    ) -> Result<(), ConfigError> {
        level.validate()?;
        validate_move_duration(self.config.move_duration)?;

        self.clean_up();
        self.topology.load(TileMap::from_level(&level));
        self.ghosts.initialize_spawn(
            &level,
            self.config.seed,
            self.config.move_duration,
            &self.topology,
        );
        self.humans.initialize_spawn(
            &level,
            self.config.seed,
            self.config.move_duration,
            &self.topology,
        );
        self.economy.initialize(level.soul_max, level.regen_period);
        self.portals.initialize(level.portal_count);

        let level_index = campaign_position.unwrap_or(level.index);
        tracing::info!(
            level = level_index,
            name = %level.name,
            ghosts = self.ghosts.count(),
            humans = self.humans.count(),
            "level started"
        );
        self.events.push(SimEvent::LevelStarted { level_index });
        self.level = Some(level);
        self.campaign_position = campaign_position;
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
        self.begin_move = true;
        Ok(())
    }

    /// Reload the current level from scratch.
    pub fn reset_level(&mut self) -> Result<(), ConfigError> {
        match self.level.clone() {
            Some(level) => self.load(level, self.campaign_position),
            None => Ok(()),
        }
    }

    /// Load the campaign level after the current one.
    pub fn next_level(&mut self) -> Result<(), ConfigError> {
        let next = self.level_index().map_or(0, |index| index + 1);
        self.start_level(next)
    }

    /// Remove every agent, arrival and queued spawn. Safe between ticks.
    pub fn clean_up(&mut self) {
        self.ghosts.clear();
        self.humans.clear();
        self.resolver.clear();
        self.portals.clear();
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> SimSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_tick(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(
            &self.time,
            self.phase,
            self.level_index(),
            &self.ghosts,
            &self.humans,
            &self.economy,
            &self.portals,
            events,
        )
    }

    /// Tick until the level ends or `max_ticks` elapse. Returns the final phase.
    pub fn run_until_finished(&mut self, dt: f32, max_ticks: u64) -> GamePhase {
        for _ in 0..max_ticks {
            if self.phase != GamePhase::Active {
                break;
            }
            self.tick(dt);
        }
        self.phase
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn level(&self) -> Option<&LevelConfig> {
        self.level.as_ref()
    }

    /// Campaign position of the loaded level, or its own `index` when it
    /// was loaded outside the campaign.
    pub fn level_index(&self) -> Option<usize> {
        let level = self.level.as_ref()?;
        Some(self.campaign_position.unwrap_or(level.index))
    }

    /// True iff the loaded level is the campaign's last one.
    pub fn is_last_level(&self) -> bool {
        self.campaign_position
            .is_some_and(|position| self.campaign.is_last_level(position))
    }

    pub fn ghosts(&self) -> &AgentPool {
        &self.ghosts
    }

    pub fn humans(&self) -> &AgentPool {
        &self.humans
    }

    pub fn ghost_count(&self) -> usize {
        self.ghosts.count()
    }

    pub fn human_count(&self) -> usize {
        self.humans.count()
    }

    pub fn economy(&self) -> &SoulEconomy {
        &self.economy
    }

    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    pub fn portals(&self) -> &PortalBank {
        &self.portals
    }

    /// Whether the next tick will start a new move cycle.
    pub fn awaiting_move(&self) -> bool {
        self.begin_move
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let loaded = match command {
            PlayerCommand::StartLevel { index } => self.start_level(index),
            PlayerCommand::ResetLevel => self.reset_level(),
            PlayerCommand::NextLevel => self.next_level(),
            PlayerCommand::OpenPortal { portal_id } => {
                if self.phase == GamePhase::Active {
                    self.open_portal(portal_id);
                }
                Ok(())
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
                Ok(())
            }
        };

        if let Err(err) = loaded {
            tracing::warn!(%err, "level load failed");
            self.events.push(SimEvent::LevelLoadFailed {
                reason: err.to_string(),
            });
        }
    }

    fn open_portal(&mut self, portal_id: u32) {
        match self.portals.activate(portal_id, &mut self.economy) {
            PortalActivation::Summoned { spirit, remaining } => {
                self.ghosts.queue_spawn(spirit);
                self.events.push(SimEvent::SoulConsumed {
                    portal_id,
                    remaining,
                });
            }
            PortalActivation::Denied => {
                self.events.push(SimEvent::SoulDenied { portal_id });
            }
            PortalActivation::UnknownPortal => {
                self.events.push(SimEvent::PortalUnknown { portal_id });
            }
        }
    }

    /// One active tick: move, resolve on full arrival, regenerate, check end.
    fn run_tick(&mut self, dt: f32) {
        let ghosts_ready =
            self.ghosts
                .tick(dt, self.begin_move, &self.topology, &mut self.resolver);
        let humans_ready =
            self.humans
                .tick(dt, self.begin_move, &self.topology, &mut self.resolver);

        // Only a full arrival re-arms movement.
        self.begin_move = false;

        if ghosts_ready && humans_ready {
            let outcome = self.resolver.resolve();
            self.apply_collisions(outcome);
            for (id, spirit) in self.ghosts.drain_spawn_queue(&self.topology) {
                self.events.push(SimEvent::GhostSpawned { id, spirit });
            }
            self.begin_move = true;
        }

        let regenerated = self.economy.update(dt);
        if regenerated > 0 {
            self.events.push(SimEvent::SoulsRegenerated {
                amount: regenerated,
                current: self.economy.current(),
            });
        }

        self.check_level_end();
    }

    fn apply_collisions(&mut self, outcome: CollisionOutcome) {
        for merge in &outcome.merges {
            self.events.push(SimEvent::GhostsMerged {
                cell: merge.cell,
                spirit: merge.spirit,
                count: merge.count,
            });
        }
        for annihilation in &outcome.annihilations {
            self.events.push(SimEvent::GhostsAnnihilated {
                cell: annihilation.cell,
                count: annihilation.count,
            });
        }

        for id in outcome.ghosts_to_destroy {
            if let Some(cell) = self.ghosts.remove(id) {
                self.events.push(SimEvent::GhostDestroyed { id, cell });
            }
        }

        let soul_gain = self
            .level
            .as_ref()
            .map_or(0, |level| level.soul_max_per_human);
        for id in outcome.humans_to_destroy {
            if let Some(cell) = self.humans.remove(id) {
                self.economy.increase_max(soul_gain);
                self.events.push(SimEvent::HumanDestroyed { id, cell });
            }
        }

        for spirit in outcome.spawn_requests {
            self.ghosts.queue_spawn(spirit);
        }
    }

    /// Emit the end-of-level event once, on the tick a population hits zero.
    /// Losing every ghost wins over clearing every human.
    fn check_level_end(&mut self) {
        let Some(level_index) = self.level_index() else {
            return;
        };

        if self.ghosts.is_empty() {
            tracing::info!(level = level_index, "game over");
            self.phase = GamePhase::GameOver;
            self.events.push(SimEvent::GameOver { level_index });
        } else if self.humans.is_empty() {
            let final_level = self.is_last_level();
            tracing::info!(level = level_index, final_level, "level complete");
            self.phase = GamePhase::LevelComplete;
            self.events.push(SimEvent::LevelComplete {
                level_index,
                final_level,
            });
        }
    }
}
