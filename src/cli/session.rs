//! Request dispatch for the CLI
//!
//! A [`Session`] owns the in-memory inventory and turns one JSON request
//! into one JSON response. It never writes to stdout itself.
//!
//! Requests:
//! - `{"op":"query","query":{...}}`
//! - `{"op":"add","snack":{...}}` or `{"op":"add","form":{...}}`
//! - `{"op":"update","id":n,"snack":{...}}` or with `"form"`
//! - `{"op":"delete","id":n}`
//! - `{"op":"bulk_delete","ids":[...]}`
//! - `{"op":"toggle_stock","ids":[...]}`
//! - `{"op":"categories"}`
//! - `{"op":"distribution","query":{...}}`

use serde_json::{json, Value};

use crate::engine::{self, categories, category_distribution};
use crate::inventory::{Inventory, InventoryError, RecordValidator, SnackDraft, SnackForm};
use crate::observability::{log_event_with_fields, Event};
use crate::query::{Query, QueryDefaults, QueryError, QueryRequest};

use super::errors::CliError;
use super::io::{error_response, ok_response};

/// A request that could not be served
#[derive(Debug)]
struct Rejection {
    code: &'static str,
    message: String,
    event: Event,
}

impl From<QueryError> for Rejection {
    fn from(e: QueryError) -> Self {
        Self {
            code: e.code().code(),
            message: e.message().to_string(),
            event: Event::QueryRejected,
        }
    }
}

impl From<InventoryError> for Rejection {
    fn from(e: InventoryError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
            event: Event::RecordRejected,
        }
    }
}

impl From<CliError> for Rejection {
    fn from(e: CliError) -> Self {
        Self {
            code: e.code_str(),
            message: e.message().to_string(),
            event: Event::RequestMalformed,
        }
    }
}

type Served = Result<Value, Rejection>;

/// In-memory inventory plus the query defaults in effect
#[derive(Debug, Clone)]
pub struct Session {
    inventory: Inventory,
    defaults: QueryDefaults,
}

impl Session {
    pub fn new(inventory: Inventory, defaults: QueryDefaults) -> Self {
        Self {
            inventory,
            defaults,
        }
    }

    /// The current inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Handles one `{"op": ...}` request and returns the response object
    pub fn handle(&mut self, request: &Value) -> Value {
        let served: Served = match request.get("op").and_then(Value::as_str) {
            Some("query") => self.query(request.get("query")),
            Some("add") => self.add(request),
            Some("update") => self.update(request),
            Some("delete") => self.delete(request),
            Some("bulk_delete") => self.bulk_delete(request),
            Some("toggle_stock") => self.toggle_stock(request),
            Some("categories") => Ok(json!(categories(&self.inventory.snapshot()))),
            Some("distribution") => self.distribution(request.get("query")),
            Some(other) => {
                Err(CliError::invalid_request(format!("Unknown op '{}'", other)).into())
            }
            None => Err(CliError::invalid_request("Missing 'op'").into()),
        };
        respond(served)
    }

    /// Runs a bare query request (no `op` envelope)
    pub fn handle_query(&self, request: &Value) -> Value {
        respond(self.query(Some(request)))
    }

    /// Category distribution of the whole inventory
    pub fn handle_distribution(&self) -> Value {
        respond(self.distribution(None))
    }

    fn parse_query(&self, request: Option<&Value>) -> Result<Query, QueryError> {
        let raw = match request {
            Some(value) => QueryRequest::from_json(value.clone())?,
            None => QueryRequest::default(),
        };
        raw.validate(&self.defaults)
    }

    fn query(&self, request: Option<&Value>) -> Served {
        let query = self.parse_query(request)?;
        let records = self.inventory.snapshot();
        let page = engine::run_query(&records, &query)?;

        log_event_with_fields(
            Event::QueryComplete,
            &[
                ("page", query.page.to_string().as_str()),
                ("returned", page.len().to_string().as_str()),
                ("total_items", page.total_items.to_string().as_str()),
                ("version", self.inventory.version().to_string().as_str()),
            ],
        );

        Ok(serde_json::to_value(&page).map_err(CliError::from)?)
    }

    fn distribution(&self, request: Option<&Value>) -> Served {
        let query = self.parse_query(request)?;
        let counts = category_distribution(&self.inventory.snapshot(), &query);
        Ok(json!(counts))
    }

    fn add(&mut self, request: &Value) -> Served {
        let draft = draft_from(request)?;
        let (next, snack) = self.inventory.add(draft)?;
        self.inventory = next;

        log_event_with_fields(
            Event::RecordAdded,
            &[
                ("id", snack.id.to_string().as_str()),
                ("version", self.inventory.version().to_string().as_str()),
            ],
        );

        Ok(json!({
            "snack": snack,
            "version": self.inventory.version()
        }))
    }

    fn update(&mut self, request: &Value) -> Served {
        let id = id_from(request)?;
        let draft = draft_from(request)?;
        self.inventory = self.inventory.update(id, draft)?;

        log_event_with_fields(
            Event::RecordUpdated,
            &[
                ("id", id.to_string().as_str()),
                ("version", self.inventory.version().to_string().as_str()),
            ],
        );

        Ok(json!({
            "snack": self.inventory.get(id),
            "version": self.inventory.version()
        }))
    }

    fn delete(&mut self, request: &Value) -> Served {
        let id = id_from(request)?;
        self.inventory = self.inventory.remove(id)?;
        self.log_deleted(1);

        Ok(json!({
            "deleted": 1,
            "version": self.inventory.version()
        }))
    }

    fn bulk_delete(&mut self, request: &Value) -> Served {
        let ids = ids_from(request)?;
        let (next, deleted) = self.inventory.remove_many(&ids);
        self.inventory = next;
        self.log_deleted(deleted);

        Ok(json!({
            "deleted": deleted,
            "version": self.inventory.version()
        }))
    }

    fn toggle_stock(&mut self, request: &Value) -> Served {
        let ids = ids_from(request)?;
        let (next, toggled) = self.inventory.toggle_stock(&ids);
        self.inventory = next;

        log_event_with_fields(
            Event::StockToggled,
            &[
                ("count", toggled.to_string().as_str()),
                ("version", self.inventory.version().to_string().as_str()),
            ],
        );

        Ok(json!({
            "toggled": toggled,
            "version": self.inventory.version()
        }))
    }

    fn log_deleted(&self, count: usize) {
        log_event_with_fields(
            Event::RecordDeleted,
            &[
                ("count", count.to_string().as_str()),
                ("version", self.inventory.version().to_string().as_str()),
            ],
        );
    }
}

fn respond(served: Served) -> Value {
    match served {
        Ok(data) => ok_response(data),
        Err(rejection) => {
            log_event_with_fields(
                rejection.event,
                &[("code", rejection.code), ("message", rejection.message.as_str())],
            );
            error_response(rejection.code, &rejection.message)
        }
    }
}

/// Draft from `"snack"` (typed values) or `"form"` (text as typed)
fn draft_from(request: &Value) -> Result<SnackDraft, Rejection> {
    if let Some(snack) = request.get("snack") {
        let draft = serde_json::from_value(snack.clone()).map_err(InventoryError::from)?;
        return Ok(draft);
    }

    if let Some(form) = request.get("form") {
        let form: SnackForm = serde_json::from_value(form.clone()).map_err(InventoryError::from)?;
        return Ok(RecordValidator::parse_form(&form)?);
    }

    Err(CliError::invalid_request("Missing 'snack' or 'form'").into())
}

fn id_from(request: &Value) -> Result<u64, Rejection> {
    request
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| Rejection::from(CliError::invalid_request("Missing or invalid 'id'")))
}

fn ids_from(request: &Value) -> Result<Vec<u64>, Rejection> {
    let ids = request
        .get("ids")
        .and_then(Value::as_array)
        .ok_or_else(|| Rejection::from(CliError::invalid_request("Missing 'ids' array")))?;

    ids.iter()
        .map(|id| {
            id.as_u64().ok_or_else(|| {
                Rejection::from(CliError::invalid_request(format!(
                    "Invalid id in 'ids': {}",
                    id
                )))
            })
        })
        .collect()
}
