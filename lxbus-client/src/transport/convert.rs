//! Conversion from server DTOs to validated replies.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{ArrivalRecord, RequestId, StatusCode, StopCode};

use super::reply::{CreateReply, StatusReply};
use super::types::{ArrivalDto, CreateReplyDto, StatusReplyDto};

/// Formats the server uses for `last_modified` (Python `isoformat()`).
const LAST_MODIFIED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Convert a create-request DTO. Blank request ids count as absent.
pub fn convert_create_reply(dto: CreateReplyDto) -> CreateReply {
    CreateReply {
        status: StatusCode::new(dto.statuscode),
        request_id: dto
            .requestid
            .as_deref()
            .and_then(|id| RequestId::parse(id).ok()),
        message: dto.message.unwrap_or_default(),
    }
}

/// Convert a status DTO, keeping payload rows in server order.
pub fn convert_status_reply(dto: StatusReplyDto) -> StatusReply {
    StatusReply {
        status: StatusCode::new(dto.statuscode),
        message: dto.message.unwrap_or_default(),
        stop_code: dto
            .stopcode
            .as_deref()
            .and_then(|code| StopCode::parse(code).ok()),
        payload: dto
            .payload
            .map(|rows| rows.into_iter().map(convert_arrival).collect()),
    }
}

fn convert_arrival(dto: ArrivalDto) -> ArrivalRecord {
    let last_modified = dto.last_modified.as_deref().and_then(|raw| {
        let parsed = parse_last_modified(raw);
        if parsed.is_none() {
            debug!(raw, "ignoring unparseable last_modified");
        }
        parsed
    });

    ArrivalRecord {
        bus_number: dto.busnr.into_string(),
        destination: dto.dest,
        eta_minutes: dto.eta_minutes,
        arrival_timestamp: dto.pt_timestamp,
        last_modified,
    }
}

fn parse_last_modified(raw: &str) -> Option<NaiveDateTime> {
    LAST_MODIFIED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
