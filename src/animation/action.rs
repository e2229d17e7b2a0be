/// A named animation category with a fixed frame count and playback rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Idle,
    Walk,
    Run,
    AttackSlash,
    Hurt,
    Victory,
}

/// Static per-action configuration. Defined once, immutable during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionConfig {
    /// Number of frames in the sequence.
    pub frames: u32,
    /// Target playback rate in frames per second.
    pub fps: u32,
    /// Human-readable summary carried into generator metadata.
    pub description: &'static str,
}

impl Action {
    /// Every configured action, in generation order.
    pub const ALL: [Action; 6] = [
        Action::Idle,
        Action::Walk,
        Action::Run,
        Action::AttackSlash,
        Action::Hurt,
        Action::Victory,
    ];

    /// Directory and file-prefix name of this action.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Walk => "walk",
            Action::Run => "run",
            Action::AttackSlash => "attack_slash",
            Action::Hurt => "hurt",
            Action::Victory => "victory",
        }
    }

    /// Strict lookup by name.
    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Lenient lookup: an unrecognized name resolves to [`Action::Idle`].
    ///
    /// This is a deliberate permissive default, not a masked error: callers
    /// holding free-form action names always get a drawable pose. Use
    /// [`Action::from_name`] where strict validation is wanted.
    pub fn from_name_or_idle(name: &str) -> Action {
        Action::from_name(name).unwrap_or(Action::Idle)
    }

    pub const fn config(self) -> ActionConfig {
        match self {
            Action::Idle => ActionConfig {
                frames: 12,
                fps: 10,
                description: "breathing sway, ready stance",
            },
            Action::Walk => ActionConfig {
                frames: 8,
                fps: 12,
                description: "exaggerated stride, wide arm swings",
            },
            Action::Run => ActionConfig {
                frames: 6,
                fps: 15,
                description: "full sprint, body leaning forward",
            },
            Action::AttackSlash => ActionConfig {
                frames: 8,
                fps: 12,
                description: "wide slash with a body twist",
            },
            Action::Hurt => ActionConfig {
                frames: 6,
                fps: 15,
                description: "violent recoil, seeing stars",
            },
            Action::Victory => ActionConfig {
                frames: 12,
                fps: 10,
                description: "jumping cheer, arms raised",
            },
        }
    }
}
