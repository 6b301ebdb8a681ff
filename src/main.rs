use anyhow::{anyhow, Context};
use foody::{
    client::FoodyClient,
    config::get_configuration,
    domain::food::{name::FoodName, NewFood},
    scenario::{run_scenario, Scenario},
    telemetry::get_subscriber,
};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    tracing::info!(base_url = %config.foody.base_url, "starting run");
    let session = FoodyClient::new(config.foody.base_url.clone())
        .authenticate(&config.foody.credentials())
        .await
        .context("Could not authenticate against the food review service")?;

    let name = FoodName::try_from(format!("Food {}", uuid::Uuid::new_v4()))
        .map_err(|e| anyhow!(e))?;
    let scenario = Scenario::new(NewFood::new(name, "Some Description"), "Name Updated");

    let report = run_scenario(&session, &scenario).await;
    let failed = report.failures().count();
    if failed > 0 {
        return Err(anyhow!("{} of {} steps failed", failed, report.steps.len()));
    }

    tracing::info!(steps = report.steps.len(), "all steps passed");
    Ok(())
}
