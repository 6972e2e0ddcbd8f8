use std::{env, sync::Arc};

use antmind::{
    strategies::{Strategy, StrategyKind},
    world::{
        models::{
            APIVersion,
            Decision,
            ForgetRequest,
            Forgotten,
            PerceptionRequest,
            Status,
        },
        perception::Perception,
    },
};
use color_eyre::{eyre::WrapErr, Result};
use log::{debug, info};
use warp::{http::Method, Filter, Rejection, Reply};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

const DEFAULT_PORT: u16 = 6502;

/// Everything the server reads from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    kind: StrategyKind,
    seed: Option<u64>,
    port: u16,
}

impl Settings {
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kind = lookup("ANTMIND_STRATEGY")
            .map_or(Ok(StrategyKind::Smart), |kind| kind.parse())
            .wrap_err("ANTMIND_STRATEGY")?;

        let seed = lookup("ANTMIND_SEED")
            .map(|seed| seed.trim().parse::<u64>())
            .transpose()
            .wrap_err("ANTMIND_SEED must be an unsigned integer")?;

        let port = lookup("ANTMIND_PORT")
            .map_or(Ok(DEFAULT_PORT), |port| port.trim().parse::<u16>())
            .wrap_err("ANTMIND_PORT must be a port number")?;

        Ok(Self { kind, seed, port })
    }

    fn strategy(&self) -> Arc<dyn Strategy> {
        let config = self
            .seed
            .map(|seed| self.kind.default_config().seeded(seed));
        Arc::from(self.kind.build(config))
    }
}

fn api(
    kind: StrategyKind,
    strategy: Arc<dyn Strategy>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let healthz = warp::get().and(warp::path::end()).map(move || {
        warp::reply::json(&Status {
            apiversion: APIVersion::One,
            author:     AUTHOR.to_owned(),
            strategy:   kind.to_string(),
            version:    VERSION.to_owned(),
        })
    });

    let deciding = Arc::clone(&strategy);
    let decide = warp::post()
        .and(warp::path("decide"))
        .and(warp::path::end())
        .and(warp::body::json())
        .map(move |request: PerceptionRequest| {
            let perception = Perception::from(request);
            let action = deciding.decide_action(&perception);
            warp::reply::json(&Decision { action })
        });

    let forget = warp::post()
        .and(warp::path("forget"))
        .and(warp::path::end())
        .and(warp::body::json())
        .map(move |request: ForgetRequest| {
            let forgotten = strategy.forget(request.ant_id);
            debug!(
                "forgot ant {} ({forgotten}), {} still tracked",
                request.ant_id,
                strategy.tracked_ants()
            );
            warp::reply::json(&Forgotten { forgotten })
        });

    healthz.or(decide).or(forget)
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let settings = Settings::from_env()?;
    info!(
        "{} ants, seed {:?}, listening on {}",
        settings.kind, settings.seed, settings.port
    );

    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let routes = api(settings.kind, settings.strategy())
        .with(cors)
        .with(logging);

    warp::serve(routes).run(([0, 0, 0, 0], settings.port)).await;

    Ok(())
}
