use anyhow::Result;

use super::{load_resolved_config, open_session};
use crate::config::ResolveOptions;
use crate::interactive::InteractiveSession;

pub async fn run_interactive(options: ResolveOptions) -> Result<()> {
    let config = load_resolved_config(&options)?;
    let session = open_session(&config);
    InteractiveSession::new(session, config.endpoint).run().await
}
