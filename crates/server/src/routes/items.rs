use actix_web::{post, web, HttpResponse};
use reportgen_report::parse_pasted_items;

use crate::types::{ParseItemsRequest, ParseItemsResponse};

/// POST /api/items/parse - split pasted text into work items
#[post("/items/parse")]
pub async fn parse_items(req: web::Json<ParseItemsRequest>) -> HttpResponse {
    let items = parse_pasted_items(&req.text);
    HttpResponse::Ok().json(ParseItemsResponse { items })
}
