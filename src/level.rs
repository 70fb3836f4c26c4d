use std::sync::LazyLock;

use serde::Deserialize;

/// The one bundled level, embedded at compile time.
static LEVEL: LazyLock<Level> =
    LazyLock::new(|| Level::parse(include_str!("../assets/level.json")));

pub(crate) fn get() -> &'static Level {
    &LEVEL
}

#[derive(Deserialize)]
pub(crate) struct Level {
    pub(crate) player_start_x: f32,
    pub(crate) companion_x: f32,
    #[serde(default = "default_walk_speed")]
    pub(crate) walk_speed: f32,
    pub(crate) treats: Vec<TreatSpawn>,
    pub(crate) win_title: String,
    pub(crate) win_message: String,
}

#[derive(Deserialize)]
pub(crate) struct TreatSpawn {
    pub(crate) x: f32,
}

fn default_walk_speed() -> f32 {
    3.0
}

impl Level {
    pub(crate) fn parse(json_str: &str) -> Self {
        serde_json::from_str(json_str).expect("invalid JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_level_parses() {
        let level = get();
        assert_eq!(level.treats.len(), 4);
        assert!(level.player_start_x < level.companion_x);
    }

    #[test]
    fn walk_speed_defaults_when_omitted() {
        let level = Level::parse(
            r#"{
                "player_start_x": 10,
                "companion_x": 200,
                "treats": [{"x": 100}],
                "win_title": "Done!",
                "win_message": "All done."
            }"#,
        );
        assert_eq!(level.walk_speed, 3.0);
    }

    #[test]
    fn bundled_treats_sit_between_start_and_companion() {
        let level = get();
        for spawn in &level.treats {
            assert!(spawn.x > level.player_start_x);
            assert!(spawn.x < level.companion_x);
        }
    }
}
