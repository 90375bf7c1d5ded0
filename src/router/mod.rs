//! Method × id × existence dispatch for the `/routines` resource.
//!
//! [`RequestRouter`] is the one piece of real decision logic in this crate:
//! it turns a generic HTTP-like request into a CRUD call on the injected
//! [`RoutineService`] and maps every outcome onto a status code plus a
//! uniform `{message, data}` envelope.

mod logger;
mod request;

pub use logger::{RequestLogger, TracingLogger};
pub use request::{Envelope, Method, RouterResponse, RoutineRequest};

#[cfg(test)]
pub use logger::MockRequestLogger;

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{NewRoutine, Routine, UpdateRoutine};
use crate::domain::services::RoutineService;
use crate::error::ServiceError;

/// Routes CRUD requests for the routine collection.
///
/// `handle` never fails: expected conditions (validation, missing id,
/// unknown id, unsupported method) become 4xx envelopes, and anything the
/// per-operation arms don't classify is caught and returned as a 500.
pub struct RequestRouter {
    service: Arc<dyn RoutineService>,
    logger: Arc<dyn RequestLogger>,
}

impl RequestRouter {
    pub fn new(service: Arc<dyn RoutineService>, logger: Arc<dyn RequestLogger>) -> Self {
        Self { service, logger }
    }

    /// Handles a single request and always produces a response.
    pub async fn handle(&self, request: RoutineRequest) -> RouterResponse {
        self.logger.request(&request);

        let route = match &request.resource_id {
            Some(id) => format!("{} /routines/{}", request.method, id),
            None => format!("{} /routines", request.method),
        };

        match self.dispatch(&request, &route).await {
            Ok(response) => response,
            Err(error) => {
                self.logger.failure(&error);
                respond(500, format!("Internal server error: {error}"), None)
            }
        }
    }

    /// Covers the expected outcomes; anything propagated from here becomes
    /// a 500 in [`Self::handle`].
    async fn dispatch(
        &self,
        request: &RoutineRequest,
        route: &str,
    ) -> Result<RouterResponse, ServiceError> {
        let id = request.resource_id.as_deref();

        let response = match Method::parse(&request.method) {
            Method::Get => match id {
                Some(id) => match self.service.get(id).await? {
                    Some(routine) => respond(
                        200,
                        format!("Successfully retrieved routine at {route}"),
                        Some(to_value(&routine)?),
                    ),
                    None => respond(404, format!("Routine not found at {route}"), None),
                },
                None => {
                    let routines = self.service.list().await?;
                    let data = routines.iter().map(to_value).collect::<Result<Vec<_>, _>>()?;
                    respond(
                        200,
                        format!("Successfully retrieved routines at {route}"),
                        Some(Value::Array(data)),
                    )
                }
            },
            Method::Post => {
                let fields: NewRoutine = match decode_body(request.body.as_deref()) {
                    Ok(fields) => fields,
                    Err(error) => {
                        return Ok(respond(
                            400,
                            format!("Error creating routine at {route}: {error}"),
                            None,
                        ));
                    }
                };
                match self.service.create(fields).await {
                    Ok(routine) => respond(
                        201,
                        format!("Successfully created routine at {route}"),
                        Some(to_value(&routine)?),
                    ),
                    Err(ServiceError::Validation(reason)) => respond(
                        400,
                        format!("Error creating routine at {route}: {reason}"),
                        None,
                    ),
                    Err(error) => return Err(error),
                }
            }
            Method::Put => match id {
                None => respond(400, format!("Missing routine ID at {route}"), None),
                Some(id) => {
                    let fields: UpdateRoutine = match decode_body(request.body.as_deref()) {
                        Ok(fields) => fields,
                        Err(error) => {
                            return Ok(respond(
                                400,
                                format!("Error updating routine at {route}: {error}"),
                                None,
                            ));
                        }
                    };
                    match self.service.update(id, fields).await {
                        Ok(Some(routine)) => respond(
                            200,
                            format!("Successfully updated routine at {route}"),
                            Some(to_value(&routine)?),
                        ),
                        Ok(None) => respond(404, format!("Routine not found at {route}"), None),
                        Err(ServiceError::Validation(reason)) => respond(
                            400,
                            format!("Error updating routine at {route}: {reason}"),
                            None,
                        ),
                        Err(error) => return Err(error),
                    }
                }
            },
            Method::Delete => match id {
                None => respond(400, format!("Missing routine ID at {route}"), None),
                Some(id) => {
                    if self.service.delete(id).await? {
                        respond(204, format!("Successfully deleted routine at {route}"), None)
                    } else {
                        respond(404, format!("Routine not found at {route}"), None)
                    }
                }
            },
            Method::Unsupported => {
                respond(400, format!("Unsupported HTTP method at {route}"), None)
            }
        };

        Ok(response)
    }
}

/// Decodes an optional JSON body into the typed field set of the operation.
/// A missing body decodes as an empty object, which then trips the required
/// fields of the target struct.
fn decode_body<T: serde::de::DeserializeOwned>(body: Option<&str>) -> Result<T, serde_json::Error> {
    serde_json::from_str(body.unwrap_or("{}"))
}

fn to_value(routine: &Routine) -> Result<Value, ServiceError> {
    serde_json::to_value(routine).map_err(|e| ServiceError::internal(e.to_string()))
}

fn respond(status_code: u16, message: String, data: Option<Value>) -> RouterResponse {
    let envelope = Envelope { message, data };
    let body = serde_json::to_string(&envelope)
        .unwrap_or_else(|_| r#"{"message":"Internal server error","data":null}"#.to_string());
    RouterResponse { status_code, body }
}
