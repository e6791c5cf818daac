use clap::Parser;
use pexeso_core::{DEFAULT_PAIRS, DEFAULT_TIME_LIMIT, GameConfig, PairCount, Seconds};
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Seconds on the countdown
    #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT, conflicts_with = "untimed")]
    time: Seconds,

    /// Play without a countdown
    #[arg(short, long)]
    untimed: bool,

    /// How many pairs to deal
    #[arg(short, long, default_value_t = DEFAULT_PAIRS)]
    pairs: PairCount,
}

impl Args {
    fn game_props(&self) -> game::GameProps {
        game::GameProps {
            seed: self.seed.as_deref().map(utils::seed_from_str),
            config: GameConfig::new(self.pairs, (!self.untimed).then_some(self.time)),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game_props()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_from_location_hash() {
        let args = Args::try_parse_from("#--seed=abc&--time=45&-p&6".split(['#', '&'])).unwrap();
        let props = args.game_props();

        assert_eq!(props.seed, Some(utils::seed_from_str("abc")));
        assert_eq!(props.config.time_limit, Some(45));
        assert_eq!(props.config.pairs, 6);
    }

    #[test]
    fn empty_hash_starts_timed_game() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();
        let props = args.game_props();

        assert_eq!(props.seed, None);
        assert_eq!(props.config, GameConfig::timed(DEFAULT_TIME_LIMIT));
    }

    #[test]
    fn untimed_flag_drops_countdown() {
        let args = Args::try_parse_from("#--untimed".split(['#', '&'])).unwrap();
        assert_eq!(args.game_props().config, GameConfig::default());
        assert!(Args::try_parse_from("#--untimed&--time=10".split(['#', '&'])).is_err());
    }
}
