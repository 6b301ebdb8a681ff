//! The ordered end-to-end run against the food review service.
//!
//! Steps execute strictly in sequence and share state only through
//! [`ScenarioContext`]. A failed step is recorded and the run carries on, so
//! one report shows every broken endpoint at once.

use reqwest::StatusCode;
use serde_json::json;

use crate::client::schema::{ApiResponse, Food, PatchOperation};
use crate::client::{ApiReply, ClientError, FoodySession};
use crate::domain::food::NewFood;

pub const EDITED_MESSAGE: &str = "Successfully edited";
pub const DELETED_MESSAGE: &str = "Deleted successfully!";
pub const UNKNOWN_EDIT_MESSAGE: &str = "No food revues...";
pub const UNKNOWN_DELETE_MESSAGE: &str = "Unable to delete this food revue!";

pub const UNKNOWN_EDIT_ID: &str = "invalid";
pub const UNKNOWN_DELETE_ID: &str = "invalidId";

#[derive(thiserror::Error, Debug)]
pub enum StepFailure {
    #[error("expected status {expected}, got {actual} with body {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },
    #[error("expected message {expected:?}, got {actual:?}")]
    UnexpectedMessage {
        expected: &'static str,
        actual: Option<String>,
    },
    #[error("expected body to contain {expected:?}, got {body}")]
    UnexpectedBody { expected: &'static str, body: String },
    #[error("response carried no food id")]
    MissingFoodId,
    #[error("listing returned no foods")]
    EmptyListing,
    #[error("no {0} captured by an earlier step")]
    MissingFixture(&'static str),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// What a run needs to know up front.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub food: NewFood,
    pub edited_name: String,
}

impl Scenario {
    pub fn new(food: NewFood, edited_name: impl Into<String>) -> Self {
        Self {
            food,
            edited_name: edited_name.into(),
        }
    }
}

/// Data captured by one step and consumed by a later one.
#[derive(Debug, Default, Clone)]
pub struct ScenarioContext {
    pub food_id: Option<String>,
}

impl ScenarioContext {
    fn food_id(&self) -> Result<&str, StepFailure> {
        self.food_id
            .as_deref()
            .ok_or(StepFailure::MissingFixture("food id"))
    }
}

#[derive(Debug)]
pub struct StepReport {
    pub name: &'static str,
    pub outcome: Result<(), StepFailure>,
}

#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub steps: Vec<StepReport>,
}

impl ScenarioReport {
    fn record(&mut self, name: &'static str, outcome: Result<(), StepFailure>) {
        match &outcome {
            Ok(()) => tracing::info!(step = name, "step passed"),
            Err(e) => tracing::error!(step = name, error = %e, "step failed"),
        }
        self.steps.push(StepReport { name, outcome });
    }

    pub fn is_success(&self) -> bool {
        self.steps.iter().all(|step| step.outcome.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|step| step.outcome.is_err())
    }

    pub fn outcome_of(&self, name: &str) -> Option<&Result<(), StepFailure>> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .map(|step| &step.outcome)
    }
}

/// Runs every step in order and returns the outcome of each.
#[tracing::instrument(name = "Run scenario", skip_all)]
pub async fn run_scenario(session: &FoodySession, scenario: &Scenario) -> ScenarioReport {
    let mut context = ScenarioContext::default();
    let mut report = ScenarioReport::default();

    report.record(
        "create food",
        create_food(session, &scenario.food, &mut context).await,
    );
    report.record(
        "edit food",
        edit_food(session, &scenario.edited_name, &context).await,
    );
    report.record("list foods", list_foods(session).await);
    report.record("delete food", delete_food(session, &context).await);
    report.record(
        "delete food again",
        delete_food_again(session, &context).await,
    );
    report.record(
        "create food without name",
        create_food_without_name(session, &scenario.food).await,
    );
    report.record(
        "create food without description",
        create_food_without_description(session, &scenario.food).await,
    );
    report.record("edit unknown food", edit_unknown_food(session).await);
    report.record("delete unknown food", delete_unknown_food(session).await);

    report
}

fn expect_status(reply: &ApiReply, expected: StatusCode) -> Result<(), StepFailure> {
    if reply.status == expected {
        Ok(())
    } else {
        Err(StepFailure::UnexpectedStatus {
            expected,
            actual: reply.status,
            body: reply.body.clone(),
        })
    }
}

fn expect_message(reply: &ApiReply, expected: &'static str) -> Result<(), StepFailure> {
    let body: ApiResponse = reply.json()?;
    if body.message.as_deref() == Some(expected) {
        Ok(())
    } else {
        Err(StepFailure::UnexpectedMessage {
            expected,
            actual: body.message,
        })
    }
}

fn created_food_id(reply: &ApiReply) -> Result<String, StepFailure> {
    expect_status(reply, StatusCode::CREATED)?;

    reply
        .json::<ApiResponse>()?
        .food_id
        .filter(|id| !id.is_empty())
        .ok_or(StepFailure::MissingFoodId)
}

async fn create_food(
    session: &FoodySession,
    food: &NewFood,
    context: &mut ScenarioContext,
) -> Result<(), StepFailure> {
    let food_id = created_food_id(&session.create_food(food).await?)?;

    tracing::info!(%food_id, "captured food id");
    context.food_id = Some(food_id);
    Ok(())
}

async fn edit_food(
    session: &FoodySession,
    edited_name: &str,
    context: &ScenarioContext,
) -> Result<(), StepFailure> {
    let food_id = context.food_id()?;
    let reply = session
        .edit_food(food_id, &[PatchOperation::replace("/name", edited_name)])
        .await?;

    expect_status(&reply, StatusCode::OK)?;
    expect_message(&reply, EDITED_MESSAGE)
}

async fn list_foods(session: &FoodySession) -> Result<(), StepFailure> {
    let reply = session.all_foods().await?;
    expect_status(&reply, StatusCode::OK)?;

    let foods: Vec<Food> = reply.json()?;
    if foods.is_empty() {
        return Err(StepFailure::EmptyListing);
    }
    Ok(())
}

async fn delete_food(
    session: &FoodySession,
    context: &ScenarioContext,
) -> Result<(), StepFailure> {
    let reply = session.delete_food(context.food_id()?).await?;

    expect_status(&reply, StatusCode::OK)?;
    expect_message(&reply, DELETED_MESSAGE)
}

/// A food can only be deleted once.
async fn delete_food_again(
    session: &FoodySession,
    context: &ScenarioContext,
) -> Result<(), StepFailure> {
    let reply = session.delete_food(context.food_id()?).await?;

    expect_status(&reply, StatusCode::BAD_REQUEST)?;
    expect_message(&reply, UNKNOWN_DELETE_MESSAGE)
}

async fn create_food_without_name(
    session: &FoodySession,
    food: &NewFood,
) -> Result<(), StepFailure> {
    let body = json!({ "Description": food.description });
    let reply = session.create_food(&body).await?;

    expect_status(&reply, StatusCode::BAD_REQUEST)
}

/// The created food is deleted again so the run leaves nothing behind.
async fn create_food_without_description(
    session: &FoodySession,
    food: &NewFood,
) -> Result<(), StepFailure> {
    let plain_food = NewFood {
        name: food.name.clone(),
        description: None,
    };
    let food_id = created_food_id(&session.create_food(&plain_food).await?)?;

    let reply = session.delete_food(&food_id).await?;
    expect_status(&reply, StatusCode::OK)?;
    expect_message(&reply, DELETED_MESSAGE)
}

async fn edit_unknown_food(session: &FoodySession) -> Result<(), StepFailure> {
    let reply = session
        .edit_food(
            UNKNOWN_EDIT_ID,
            &[PatchOperation::replace("/name", "Name Updated")],
        )
        .await?;

    expect_status(&reply, StatusCode::NOT_FOUND)?;
    if !reply.body.contains(UNKNOWN_EDIT_MESSAGE) {
        return Err(StepFailure::UnexpectedBody {
            expected: UNKNOWN_EDIT_MESSAGE,
            body: reply.body,
        });
    }
    expect_message(&reply, UNKNOWN_EDIT_MESSAGE)
}

async fn delete_unknown_food(session: &FoodySession) -> Result<(), StepFailure> {
    let reply = session.delete_food(UNKNOWN_DELETE_ID).await?;

    expect_status(&reply, StatusCode::BAD_REQUEST)?;
    expect_message(&reply, UNKNOWN_DELETE_MESSAGE)
}
