use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::gravity::{GravityClock, GravityTuning};
use super::playfield::Playfield;
use super::{LockReport, PlayerAction};

const FRAMES_PER_SECOND: f64 = 60.0;

/// Frames an attack spends in the pending queue before it becomes
/// insertable garbage; the window in which the target can cancel it.
pub const DEFAULT_GARBAGE_DELAY_FRAMES: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    pub gravity: GravityTuning,
    pub garbage_delay_frames: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            gravity: GravityTuning::default(),
            garbage_delay_frames: DEFAULT_GARBAGE_DELAY_FRAMES,
        }
    }
}

/// An attack travelling toward a playfield's reception queue.
#[derive(Debug, Clone)]
struct PendingAttack {
    lines: u32,
    age_frames: f64,
}

/// Per-player pending-garbage queues. Outgoing attacks cancel against the
/// sender's own pending garbage first; the remainder is forwarded and
/// matures into the target's reception queue after a fixed delay.
#[derive(Debug, Clone)]
struct GarbageRouter {
    queues: Vec<VecDeque<PendingAttack>>,
    delay_frames: f64,
}

impl GarbageRouter {
    fn new(delay_frames: f64) -> Self {
        Self {
            queues: Vec::new(),
            delay_frames,
        }
    }

    fn add_queue(&mut self) {
        self.queues.push(VecDeque::new());
    }

    fn clear(&mut self) {
        for queue in &mut self.queues {
            queue.clear();
        }
    }

    /// Burn `lines` against the player's pending garbage, front first.
    /// Returns what is left of the attack.
    fn cancel(&mut self, player: usize, mut lines: u32) -> u32 {
        let queue = &mut self.queues[player];
        while lines > 0 {
            match queue.front_mut() {
                Some(front) if lines >= front.lines => {
                    lines -= front.lines;
                    queue.pop_front();
                }
                Some(front) => {
                    front.lines -= lines;
                    lines = 0;
                }
                None => break,
            }
        }
        lines
    }

    fn send(&mut self, target: usize, lines: u32) {
        self.queues[target].push_back(PendingAttack {
            lines,
            age_frames: 0.0,
        });
    }

    fn pending(&self, player: usize) -> u32 {
        self.queues[player].iter().map(|a| a.lines).sum()
    }

    /// Age every pending attack by `frames`; matured front entries are
    /// popped and returned as (player, lines) in queue order.
    fn tick(&mut self, frames: f64) -> Vec<(usize, u32)> {
        let mut matured = Vec::new();
        for (player, queue) in self.queues.iter_mut().enumerate() {
            for attack in queue.iter_mut() {
                attack.age_frames += frames;
            }
            while queue
                .front()
                .map_or(false, |a| a.age_frames >= self.delay_frames)
            {
                if let Some(attack) = queue.pop_front() {
                    matured.push((player, attack.lines));
                }
            }
        }
        matured
    }
}

/// A set of playfields advancing under one clock, one seed and one garbage
/// router. Player indices are dense and fixed; passing an out-of-range index
/// is a programmer error and panics.
#[derive(Debug)]
pub struct Match {
    seed: u64,
    rng: StdRng,
    players: Vec<Playfield>,
    clock: GravityClock,
    router: GarbageRouter,
}

impl Match {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, MatchConfig::default())
    }

    pub fn with_config(seed: u64, config: MatchConfig) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            players: Vec::new(),
            clock: GravityClock::new(config.gravity),
            router: GarbageRouter::new(config.garbage_delay_frames),
        }
    }

    /// Add a playfield, spawn its first piece, and return its index.
    pub fn add_player(&mut self) -> usize {
        let mut field = Playfield::new();
        field.reset(&mut self.rng);
        self.players.push(field);
        self.router.add_queue();
        self.players.len() - 1
    }

    /// Restart from the stored seed. Equivalent to rebuilding the match with
    /// the same seed and player count.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.clock.reset();
        self.router.clear();
        for player in &mut self.players {
            player.reset(&mut self.rng);
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn board(&self, player: usize) -> &Playfield {
        &self.players[player]
    }

    pub fn board_mut(&mut self, player: usize) -> &mut Playfield {
        &mut self.players[player]
    }

    /// Attack lines travelling toward a player, still cancellable.
    pub fn pending_garbage(&self, player: usize) -> u32 {
        self.router.pending(player)
    }

    /// Submit one driver action for a player, routing any resulting attack.
    pub fn apply_action(&mut self, player: usize, action: PlayerAction) {
        let report = self.players[player].handle(action, &mut self.rng);
        self.route(player, &report);
    }

    /// Advance the whole match by `dt`: shared gravity first, then each
    /// playfield's lock-delay service, then garbage maturation.
    pub fn update(&mut self, dt: Duration) {
        let rows = self.clock.tick(dt);
        if rows > 0 {
            for player in &mut self.players {
                player.apply_gravity(rows);
            }
        }

        for i in 0..self.players.len() {
            let report = self.players[i].tick(dt, &mut self.rng);
            self.route(i, &report);
        }

        let frames = dt.as_secs_f64() * FRAMES_PER_SECOND;
        for (player, lines) in self.router.tick(frames) {
            self.players[player].queue_garbage(lines);
        }
    }

    /// Cancel `lines` against the sender's own pending garbage, then forward
    /// the remainder to an opponent's pending queue.
    pub fn transfer_garbage(&mut self, sender: usize, lines: u32) {
        assert!(sender < self.players.len(), "no such player: {}", sender);
        let remaining = self.router.cancel(sender, lines);
        if remaining == 0 {
            return;
        }
        if let Some(target) = self.pick_target(sender) {
            self.router.send(target, remaining);
        }
    }

    fn route(&mut self, sender: usize, report: &LockReport) {
        for &lines in &report.outgoing {
            self.transfer_garbage(sender, lines);
        }
    }

    /// Round-robin among living opponents.
    fn pick_target(&self, sender: usize) -> Option<usize> {
        let n = self.players.len();
        for offset in 1..n {
            let candidate = (sender + offset) % n;
            if !self.players[candidate].game_over {
                return Some(candidate);
            }
        }
        None
    }

    /// The match ends when at most one playfield is still alive.
    pub fn is_over(&self) -> bool {
        self.players.len() >= 2 && self.alive_count() <= 1
    }

    /// The surviving player once the match is over.
    pub fn winner(&self) -> Option<usize> {
        if !self.is_over() {
            return None;
        }
        self.players.iter().position(|p| !p.game_over)
    }

    fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| !p.game_over).count()
    }
}
