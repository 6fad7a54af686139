use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use inventaris_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

const SHEET: &str = "\
Nomor Asset,PENEMPATAN ASET,Sumber,Nama Asset,Kelompok Aset,Kepemilikan,Qty,Harga Perolehan,Tahun Beli,Bulan Beli,Umur Ekonomis,Nilai Penyusutan per Bulan,Status,Label
0001/RMU/2021,Studio,Invoice Fauzie,Kamera,Kelompok I,RMU,1,12000000,2021,Januari,4,250000,Available,TRUE
0002/LDR/2023,Gudang,Hibah,Tripod,Kelompok I,LDR,3,1500000,2023,Sept,4,31250,Available,TRUE
0003/RMU/2024,Studio,Invoice Fauzie,Lampu,Kelompok I,RMU,2,4800000,2024,Juni,4,0,Missing,FALSE
";

async fn app(seed: Option<&str>) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("inventory.csv");
    if let Some(contents) = seed {
        std::fs::write(&path, contents).unwrap();
    }
    let config = Config::with_sheet_path(path);
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config).unwrap(), tmp)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into()))
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let (app, _tmp) = app(None).await;

    let (status, body) = send(&app, get("/api/v1/healthz")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".into()));
}

#[tokio::test]
async fn list_assets_applies_query_filter() {
    let (app, _tmp) = app(Some(SHEET)).await;

    let (status, body) = send(&app, get("/api/v1/assets?placement=Studio&ownership=RMU")).await;

    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["assetNumber"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["0001/RMU/2021", "0003/RMU/2024"]);
}

#[tokio::test]
async fn create_then_fetch_asset() {
    let (app, _tmp) = app(None).await;
    let new_asset = json!({
        "assetNumber": "0001/RMU/2023",
        "placement": "Studio",
        "name": "Kamera",
        "ownership": "RMU",
        "quantity": 1,
        "acquisitionCost": 12000000,
        "purchaseYear": 2023,
        "purchaseMonth": "Januari",
        "annualDepreciationPercent": 25
    });

    let (status, created) = send(&app, with_json("POST", "/api/v1/assets", new_asset.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["monthlyDepreciation"].as_f64(), Some(250000.0));
    assert_eq!(created["status"], "Available");

    let (status, fetched) = send(&app, get("/api/v1/assets/item?number=0001%2FRMU%2F2023")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Kamera");

    let (status, conflict) = send(&app, with_json("POST", "/api/v1/assets", new_asset)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(conflict["code"], 409);
}

#[tokio::test]
async fn create_rejects_invalid_input() {
    let (app, _tmp) = app(None).await;

    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/api/v1/assets",
            json!({
                "assetNumber": "0009/RMU/2023",
                "quantity": 0,
                "acquisitionCost": 1000000,
                "purchaseYear": 2023,
                "purchaseMonth": "Mei",
                "annualDepreciationPercent": 25
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn update_and_delete_asset() {
    let (app, _tmp) = app(Some(SHEET)).await;
    let update = json!({
        "placement": "Gudang",
        "source": "Invoice Fauzie",
        "name": "Kamera",
        "assetGroup": "Kelompok I",
        "ownership": "RMU",
        "quantity": 1,
        "documentationUrl": "",
        "invoiceUrl": "",
        "acquisitionCost": 12000000,
        "purchaseYear": 2021,
        "purchaseMonth": "Januari",
        "economicLifeYears": 4,
        "monthlyDepreciation": 250000,
        "status": "Available",
        "label": "TRUE"
    });

    let (status, updated) = send(
        &app,
        with_json("PUT", "/api/v1/assets/item?number=0001%2FRMU%2F2021", update),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["placement"], "Gudang");

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/v1/assets/item?number=0001%2FRMU%2F2021")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get("/api/v1/assets/item?number=0001%2FRMU%2F2021")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn asset_depreciation_at_requested_date() {
    let (app, _tmp) = app(Some(SHEET)).await;

    let (status, body) = send(
        &app,
        get("/api/v1/assets/depreciation?number=0001%2FRMU%2F2021&asOf=2023-01-15"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "DEPRECIATING");
    assert_eq!(body["progressPercent"], 50);
    assert_eq!(body["formattedBookValue"], "Rp 6.000.000");
    assert_eq!(body["result"]["totalMonths"], 48);
    assert_eq!(body["result"]["endDate"], json!({ "year": 2025, "month": 1 }));
}

#[tokio::test]
async fn asset_depreciation_reports_bad_rows() {
    let (app, _tmp) = app(Some(SHEET)).await;

    // "Sept" is not a month name the sheet uses
    let (status, body) = send(
        &app,
        get("/api/v1/assets/depreciation?number=0002%2FLDR%2F2023&asOf=2024-01-01"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Sept"));

    // Zero monthly depreciation is shown, not rejected
    let (status, body) = send(
        &app,
        get("/api/v1/assets/depreciation?number=0003%2FRMU%2F2024&asOf=2025-06-01"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "INVALID_RATE");
    assert_eq!(body["formattedBookValue"], "Rp 4.800.000");
}

#[tokio::test]
async fn ad_hoc_evaluation() {
    let (app, _tmp) = app(None).await;

    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/api/v1/depreciation/evaluate",
            json!({
                "acquisitionCost": 12000000,
                "monthlyDepreciation": 250000,
                "purchaseYear": 2023,
                "purchaseMonth": "januari",
                "asOf": "2025-01-20"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["elapsedMonths"], 24);
    assert_eq!(body["bookValue"].as_f64(), Some(6000000.0));
    assert_eq!(body["progressRatio"].as_f64(), Some(0.5));
}

#[tokio::test]
async fn ad_hoc_evaluation_rejects_oversized_schedule() {
    let (app, _tmp) = app(None).await;

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/api/v1/depreciation/evaluate",
            json!({
                "acquisitionCost": 10000000000u64,
                "monthlyDepreciation": 1,
                "purchaseYear": 2023,
                "purchaseMonth": "Mei",
                "asOf": "2025-01-20"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_summary_and_options() {
    let (app, _tmp) = app(Some(SHEET)).await;

    let (status, summary) = send(&app, get("/api/v1/dashboard/summary?ownership=RMU")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["assetCount"], 2);
    assert_eq!(summary["formattedTotalAcquisitionCost"], "Rp 16.800.000");

    let (status, options) = send(&app, get("/api/v1/dashboard/filter-options")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options["placements"], json!(["Gudang", "Studio"]));
    assert_eq!(options["purchaseMonths"], json!(["Januari", "Juni"]));
}
