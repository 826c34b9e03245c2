//! Single binary web server: JSON REST API over the scheduler library.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080). Log level via RUST_LOG.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use round_robin_scheduler::{
    build_schedule, compute_standings, date_label, import_csv, set_match_result, CalendarDate,
    Competition, CompetitionError, CompetitionId, Match, MatchId, Metric,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-competition entry: competition data + last activity time (for auto-cleanup).
struct CompetitionEntry {
    competition: Competition,
    last_activity: Instant,
}

/// In-memory state: many competitions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<CompetitionId, CompetitionEntry>>>;

/// Inactivity threshold: competitions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddParticipantBody {
    name: String,
}

#[derive(Deserialize)]
struct AddDateBody {
    date: CalendarDate,
}

#[derive(Deserialize)]
struct ResultBody {
    home_score: i64,
    away_score: i64,
}

#[derive(Deserialize)]
struct StandingsQuery {
    #[serde(default)]
    metric: Metric,
}

#[derive(Serialize)]
struct FixturesResponse<'a> {
    date: CalendarDate,
    label: String,
    matches: Vec<&'a Match>,
}

/// Path segment: competition id (e.g. /api/competitions/{id})
#[derive(Deserialize)]
struct CompetitionPath {
    id: CompetitionId,
}

#[derive(Deserialize)]
struct ParticipantPath {
    id: CompetitionId,
    name: String,
}

#[derive(Deserialize)]
struct DatePath {
    id: CompetitionId,
    date: CalendarDate,
}

#[derive(Deserialize)]
struct MatchPath {
    id: CompetitionId,
    match_id: MatchId,
}

fn bad_request(e: CompetitionError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Look up a competition, refresh its activity time and hand it to `f`.
fn with_competition<F>(state: &AppState, id: CompetitionId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Competition) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.competition)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No competition" })),
    }
}

/// Run a mutating operation and respond with the updated competition.
fn update<F>(state: &AppState, id: CompetitionId, op: F) -> HttpResponse
where
    F: FnOnce(&mut Competition) -> Result<(), CompetitionError>,
{
    with_competition(state, id, |c| match op(c) {
        Ok(()) => HttpResponse::Ok().json(&*c),
        Err(e) => bad_request(e),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "round-robin-scheduler",
    })
}

/// Create a new competition (returns it with id; client stores id for subsequent requests).
#[post("/api/competitions")]
async fn api_create_competition(state: AppState) -> HttpResponse {
    let competition = Competition::new();
    let id = competition.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created competition {}", id);
    let entry = g.entry(id).or_insert(CompetitionEntry {
        competition,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(&entry.competition)
}

#[get("/api/competitions/{id}")]
async fn api_get_competition(state: AppState, path: Path<CompetitionPath>) -> HttpResponse {
    with_competition(&state, path.id, |c| HttpResponse::Ok().json(&*c))
}

/// Add a participant (Setup only). The name is normalized before it is stored.
#[post("/api/competitions/{id}/participants")]
async fn api_add_participant(
    state: AppState,
    path: Path<CompetitionPath>,
    body: Json<AddParticipantBody>,
) -> HttpResponse {
    update(&state, path.id, |c| c.add_participant(&body.name).map(|_| ()))
}

#[delete("/api/competitions/{id}/participants/{name}")]
async fn api_remove_participant(state: AppState, path: Path<ParticipantPath>) -> HttpResponse {
    update(&state, path.id, |c| c.remove_participant(&path.name))
}

#[post("/api/competitions/{id}/dates")]
async fn api_add_date(
    state: AppState,
    path: Path<CompetitionPath>,
    body: Json<AddDateBody>,
) -> HttpResponse {
    update(&state, path.id, |c| c.add_date(body.date))
}

#[delete("/api/competitions/{id}/dates/{date}")]
async fn api_remove_date(state: AppState, path: Path<DatePath>) -> HttpResponse {
    update(&state, path.id, |c| c.remove_date(path.date))
}

/// Bulk add participants and dates from a CSV body (Setup only).
#[post("/api/competitions/{id}/import")]
async fn api_import(state: AppState, path: Path<CompetitionPath>, body: String) -> HttpResponse {
    with_competition(&state, path.id, |c| match import_csv(c, &body) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => bad_request(e),
    })
}

/// Generate the round robin and assign dates (Setup -> Scheduled).
#[post("/api/competitions/{id}/schedule")]
async fn api_build_schedule(state: AppState, path: Path<CompetitionPath>) -> HttpResponse {
    update(&state, path.id, build_schedule)
}

/// Restart: back to Setup with the same participants and dates.
#[post("/api/competitions/{id}/restart")]
async fn api_restart(state: AppState, path: Path<CompetitionPath>) -> HttpResponse {
    update(&state, path.id, Competition::restart)
}

#[get("/api/competitions/{id}/fixtures/{date}")]
async fn api_fixtures(state: AppState, path: Path<DatePath>) -> HttpResponse {
    with_competition(&state, path.id, |c| {
        HttpResponse::Ok().json(FixturesResponse {
            date: path.date,
            label: date_label(path.date),
            matches: c.schedule.fixtures_on(path.date).collect(),
        })
    })
}

/// Enter or overwrite the score of one match (Scheduled only).
#[put("/api/competitions/{id}/matches/{match_id}/result")]
async fn api_set_result(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    update(&state, path.id, |c| {
        set_match_result(c, path.match_id, body.home_score, body.away_score)
    })
}

/// Standings table, ranked by `?metric=points` (default) or `?metric=percentage`.
#[get("/api/competitions/{id}/standings")]
async fn api_standings(
    state: AppState,
    path: Path<CompetitionPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    with_competition(&state, path.id, |c| {
        HttpResponse::Ok().json(compute_standings(&c.schedule, query.metric))
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<CompetitionId, CompetitionEntry>::new()));

    // Background task: every 30 minutes, remove competitions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive competition(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_competition)
            .service(api_get_competition)
            .service(api_add_participant)
            .service(api_remove_participant)
            .service(api_add_date)
            .service(api_remove_date)
            .service(api_import)
            .service(api_build_schedule)
            .service(api_restart)
            .service(api_fixtures)
            .service(api_set_result)
            .service(api_standings)
    })
    .bind(bind)?
    .run()
    .await
}
