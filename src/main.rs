mod commands;
mod util;
mod structures;
mod events;
mod client;
mod vanity;

use log::{error, info};

#[tokio::main]
async fn main() {
  env_logger::init();

  info!("Loading configuration from {}", client::config_path());
  let framework = match client::init().await {
    Ok(framework) => framework,
    Err(why) => {
      error!("{}", why);
      std::process::exit(1);
    }
  };

  /* Starting Poise framework */
  if let Err(why) = framework.run().await {
    error!("Client error: {}", why);
    std::process::exit(1);
  }
}
