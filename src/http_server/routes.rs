//! json api over the device facade.
//! handlers only parse the path and query, the device calls run on the blocking pool.

use std::str::FromStr;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use super::error::blocking_error;
use crate::common::error::{ErrorCategory, KeikoError, KeikoResult};
use crate::driver::device::Client;
use crate::entity::bo::state_bo::{BuzzerMode, Color, LampMode, SwitchState, Terminal, Timing};
use crate::entity::dto::response_dto::{ContractDto, ResultDto};
use crate::{error, warn};

const LOG_TAG: &str = "http_routes";

type ApiResult = Result<HttpResponse, actix_web::Error>;

#[derive(Debug, Deserialize)]
struct PlayQuery {
    #[serde(default = "default_times")]
    times: u8,
}

fn default_times() -> u8 {
    1
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum VoiceAction {
    Play,
    Repeat,
    Stop,
}

impl FromStr for VoiceAction {
    type Err = KeikoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(VoiceAction::Play),
            "repeat" => Ok(VoiceAction::Repeat),
            "stop" => Ok(VoiceAction::Stop),
            _ => Err(KeikoError::Validation(format!("unknown voice state: {}", s))),
        }
    }
}

fn parse_voice_number(number: &str) -> KeikoResult<u8> {
    number
        .parse::<u8>()
        .map_err(|_| KeikoError::Validation(format!("invalid voice number: {}", number)))
}

/// run a device call on the blocking pool and log its failure
async fn call<R, F>(client: web::Data<Client>, f: F) -> Result<R, actix_web::Error>
where
    F: FnOnce(&Client) -> KeikoResult<R> + Send + 'static,
    R: Send + 'static,
{
    let result = web::block(move || f(client.get_ref())).await.map_err(blocking_error)?;
    result.map_err(|e| {
        match e.category() {
            ErrorCategory::Validation => warn!(LOG_TAG, "rejected request: {}", e),
            _ => error!(LOG_TAG, "device call failed: {}", e),
        }
        e.into()
    })
}

fn success() -> HttpResponse {
    HttpResponse::Ok().json(ResultDto::success())
}

#[get("/")]
async fn index() -> impl Responder {
    "keiko-client-rs API server"
}

// ================= lamps ====================

#[get("/lamps")]
async fn get_all_lamps(client: web::Data<Client>) -> ApiResult {
    let states = call(client, |c| c.lamps().status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "lamps": states })))
}

#[get("/lamps/off")]
async fn set_all_lamps_off(client: web::Data<Client>, timing: web::Query<Timing>) -> ApiResult {
    let wait = timing.wait;
    call(client, move |c| c.lamps().off(wait)).await?;
    Ok(success())
}

#[get("/lamps/{color}")]
async fn get_lamp(client: web::Data<Client>, path: web::Path<String>) -> ApiResult {
    let color: Color = path.parse()?;
    let mode = call(client, move |c| c.lamps().lamp(color).status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "lamps": { color.name(): mode } })))
}

#[get("/lamps/{color}/{state}")]
async fn set_lamp(
    client: web::Data<Client>,
    path: web::Path<(String, String)>,
    timing: web::Query<Timing>,
) -> ApiResult {
    let (color, state) = path.into_inner();
    let color: Color = color.parse()?;
    let mode: LampMode = state.parse()?;
    let timing = timing.into_inner();
    call(client, move |c| {
        let lamp = c.lamps().lamp(color);
        match mode {
            LampMode::Off => lamp.off(timing.wait),
            _ => lamp.set(mode, timing),
        }
    })
    .await?;
    Ok(success())
}

// ================= buzzer ====================

#[get("/buzzer")]
async fn get_buzzer(client: web::Data<Client>) -> ApiResult {
    let mode = call(client, |c| c.buzzer().status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "buzzer": mode })))
}

#[get("/buzzer/{state}")]
async fn set_buzzer(client: web::Data<Client>, path: web::Path<String>, timing: web::Query<Timing>) -> ApiResult {
    let mode: BuzzerMode = path.parse()?;
    let timing = timing.into_inner();
    call(client, move |c| match mode {
        BuzzerMode::Off => c.buzzer().off(timing.wait),
        _ => c.buzzer().set(mode, timing),
    })
    .await?;
    Ok(success())
}

// ================= do ====================

#[get("/do")]
async fn get_all_dos(client: web::Data<Client>) -> ApiResult {
    let states = call(client, |c| c.digital_outputs().status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "do": states })))
}

#[get("/do/{term}")]
async fn get_do(client: web::Data<Client>, path: web::Path<String>) -> ApiResult {
    let terminal: Terminal = path.parse()?;
    let state = call(client, move |c| c.digital_outputs().get(terminal).status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "do": { terminal.to_string(): state } })))
}

#[get("/do/{term}/{state}")]
async fn set_do(
    client: web::Data<Client>,
    path: web::Path<(String, String)>,
    timing: web::Query<Timing>,
) -> ApiResult {
    let (term, state) = path.into_inner();
    let terminal: Terminal = term.parse()?;
    let state: SwitchState = state.parse()?;
    let timing = timing.into_inner();
    call(client, move |c| {
        let output = c.digital_outputs().get(terminal);
        match state {
            SwitchState::On => output.on(timing),
            SwitchState::Off => output.off(timing.wait),
        }
    })
    .await?;
    Ok(success())
}

// ================= di ====================

#[get("/di")]
async fn get_all_dis(client: web::Data<Client>) -> ApiResult {
    let states = call(client, |c| c.digital_inputs().status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "di": states })))
}

#[get("/di/{term}")]
async fn get_di(client: web::Data<Client>, path: web::Path<String>) -> ApiResult {
    let terminal: Terminal = path.parse()?;
    let state = call(client, move |c| c.digital_inputs().get(terminal).status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "di": { terminal.to_string(): state } })))
}

// ================= voices ====================

#[get("/voices")]
async fn get_all_voices(client: web::Data<Client>) -> ApiResult {
    let state = call(client, |c| c.voices().status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "voices": state })))
}

#[get("/voices/stop")]
async fn set_all_voices_stop(client: web::Data<Client>) -> ApiResult {
    call(client, |c| c.voices().stop()).await?;
    Ok(success())
}

#[get("/voices/{number}")]
async fn get_voice(client: web::Data<Client>, path: web::Path<String>) -> ApiResult {
    let number = parse_voice_number(&path)?;
    let playback = call(client, move |c| c.voices().voice(number)?.status()).await?;
    Ok(HttpResponse::Ok().json(json!({ "voices": { number.to_string(): playback } })))
}

#[get("/voices/{number}/{state}")]
async fn set_voice(
    client: web::Data<Client>,
    path: web::Path<(String, String)>,
    query: web::Query<PlayQuery>,
) -> ApiResult {
    let (number, state) = path.into_inner();
    let number = parse_voice_number(&number)?;
    let action: VoiceAction = state.parse()?;
    let times = query.times;
    call(client, move |c| {
        let voice = c.voices().voice(number)?;
        match action {
            VoiceAction::Play => voice.play(times),
            VoiceAction::Repeat => voice.repeat(),
            VoiceAction::Stop => voice.stop(),
        }
    })
    .await?;
    Ok(success())
}

// ================= device info ====================

#[get("/contract")]
async fn get_contract(client: web::Data<Client>) -> ApiResult {
    let contract = call(client, |c| {
        Ok(ContractDto {
            deadline: c.raw().rdcd()?,
            number: c.raw().rdcn()?,
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "contract": contract })))
}

#[get("/model")]
async fn get_model(client: web::Data<Client>) -> ApiResult {
    let model = call(client, |c| c.raw().rdmn()).await?;
    Ok(HttpResponse::Ok().json(json!({ "model": model })))
}

#[get("/productiondate")]
async fn get_productiondate(client: web::Data<Client>) -> ApiResult {
    let date = call(client, |c| c.raw().rdpd()).await?;
    Ok(HttpResponse::Ok().json(json!({ "productiondate": date })))
}

#[get("/serialnumber")]
async fn get_serialnumber(client: web::Data<Client>) -> ApiResult {
    let serial = call(client, |c| c.raw().rdsn()).await?;
    Ok(HttpResponse::Ok().json(json!({ "serialnumber": serial })))
}

#[get("/unitid")]
async fn get_unitid(client: web::Data<Client>) -> ApiResult {
    let unit_id = call(client, |c| c.raw().utid()).await?;
    Ok(HttpResponse::Ok().json(json!({ "unitid": unit_id })))
}

#[get("/version")]
async fn get_version(client: web::Data<Client>) -> ApiResult {
    let version = call(client, |c| c.raw().vern()).await?;
    Ok(HttpResponse::Ok().json(json!({ "version": version })))
}

/// static paths go before the `{param}` paths they would otherwise match
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(get_all_lamps)
        .service(set_all_lamps_off)
        .service(get_lamp)
        .service(set_lamp)
        .service(get_buzzer)
        .service(set_buzzer)
        .service(get_all_dos)
        .service(get_do)
        .service(set_do)
        .service(get_all_dis)
        .service(get_di)
        .service(get_all_voices)
        .service(set_all_voices_stop)
        .service(get_voice)
        .service(set_voice)
        .service(get_contract)
        .service(get_model)
        .service(get_productiondate)
        .service(get_serialnumber)
        .service(get_unitid)
        .service(get_version);
}
