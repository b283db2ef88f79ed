use rand::Rng;
use recon::ss::gen_shares;
use rug::{rand::RandState, Integer};
use std::{env,
          error::Error,
          fs::File,
          io::Write,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .compact()
        .init();

    let filename = env::args()
        .nth(1)
        .unwrap_or_else(|| "task.toml".to_string());
    let k = env::args()
        .nth(2)
        .unwrap_or_else(|| 3.to_string())
        .parse::<usize>()?;
    let n = env::args()
        .nth(3)
        .unwrap_or_else(|| 5.to_string())
        .parse::<usize>()?;

    let mut rand = RandState::new();
    let mut rng = rand::thread_rng();
    let seed: u64 = rng.gen();
    rand.seed(&Integer::from(seed));

    let secret = match env::args().nth(4) {
        Some(s) => s.parse::<Integer>()?,
        None => {
            let bound = Integer::from(Integer::u_pow_u(2, 64));
            Integer::from(bound.random_below_ref(&mut rand))
        }
    };

    let task = gen_shares(&secret, k, n, &mut rand)?;
    let contents = if filename.ends_with(".json") {
        task.to_json()?
    } else {
        task.to_toml()?
    };

    let mut file = File::create(&filename)?;
    file.write_all(contents.as_bytes())?;
    info!("wrote {} shares of {} with threshold {} to {}", n, secret, k, filename);

    Ok(())
}
