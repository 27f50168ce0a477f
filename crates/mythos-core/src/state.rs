//! High-level game modes and the table of legal transitions between them.

use serde::{Deserialize, Serialize};

/// The mode the application is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// Collaborators constructed, waiting for the first frame
    Boot,
    /// Title screen; no world loaded or world unloaded
    MainMenu,
    /// Exploring a realm
    InWorld,
    /// Fighting; the world is suspended
    InBattle,
    /// Simulation halted, remembers where it came from
    Pause,
}

/// Every legal `(from, to)` edge. Anything not listed here is rejected.
pub const TRANSITIONS: &[(State, State)] = &[
    (State::Boot, State::MainMenu),
    (State::MainMenu, State::InWorld),
    (State::InWorld, State::InBattle),
    (State::InWorld, State::Pause),
    (State::InWorld, State::MainMenu),
    (State::InBattle, State::InWorld),
    (State::InBattle, State::Pause),
    (State::Pause, State::InWorld),
    (State::Pause, State::InBattle),
    (State::Pause, State::MainMenu),
];

impl State {
    pub const ALL: [State; 5] = [
        State::Boot,
        State::MainMenu,
        State::InWorld,
        State::InBattle,
        State::Pause,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            State::Boot => "Boot",
            State::MainMenu => "MainMenu",
            State::InWorld => "InWorld",
            State::InBattle => "InBattle",
            State::Pause => "Pause",
        }
    }

    /// Is `self -> to` an edge of the transition table?
    pub fn can_transition_to(&self, to: State) -> bool {
        TRANSITIONS.iter().any(|&(f, t)| f == *self && t == to)
    }

    /// States reachable from `self` in a single transition
    pub fn allowed_destinations(&self) -> impl Iterator<Item = State> + '_ {
        TRANSITIONS
            .iter()
            .filter(move |(from, _)| from == self)
            .map(|&(_, to)| to)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exhaustive() {
        let expected = [
            (State::Boot, vec![State::MainMenu]),
            (State::MainMenu, vec![State::InWorld]),
            (
                State::InWorld,
                vec![State::InBattle, State::Pause, State::MainMenu],
            ),
            (State::InBattle, vec![State::InWorld, State::Pause]),
            (
                State::Pause,
                vec![State::InWorld, State::InBattle, State::MainMenu],
            ),
        ];

        for (from, allowed) in expected {
            for to in State::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&to),
                    "{} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_no_self_edges() {
        for state in State::ALL {
            assert!(!state.can_transition_to(state));
        }
    }

    #[test]
    fn test_allowed_destinations() {
        let from_pause: Vec<State> = State::Pause.allowed_destinations().collect();
        assert_eq!(
            from_pause,
            vec![State::InWorld, State::InBattle, State::MainMenu]
        );
        assert_eq!(State::Boot.allowed_destinations().count(), 1);
    }

    #[test]
    fn test_every_state_reachable_from_boot() {
        let mut seen = vec![State::Boot];
        let mut frontier = vec![State::Boot];
        while let Some(state) = frontier.pop() {
            for next in state.allowed_destinations() {
                if !seen.contains(&next) {
                    seen.push(next);
                    frontier.push(next);
                }
            }
        }
        assert_eq!(seen.len(), State::ALL.len());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(State::InBattle.to_string(), "InBattle");
        assert_eq!(State::MainMenu.name(), "MainMenu");
    }
}
