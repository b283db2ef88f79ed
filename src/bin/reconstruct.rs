use recon::get_task;
use std::{env,
          error::Error,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .compact()
        .init();

    let mut files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        files = vec!["tasks/testcase1.json".to_string(),
                     "tasks/testcase2.json".to_string()];
    }

    for filename in &files {
        let task = match get_task(filename) {
            Ok(task) => task,
            Err(e) => {
                error!("could not load {}: {}", filename, e);
                return Err(e.into());
            }
        };
        info!("{}: n = {}, k = {}, {} points",
              filename, task.n, task.k, task.points.len());
        match task.reconstruct() {
            Ok(secret) => println!("{} constant term: {}", filename, secret),
            Err(e) => {
                error!("could not reconstruct {}: {}", filename, e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
