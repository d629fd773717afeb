//! citygdp-wasm: WebAssembly bindings for citygdp-core
//!
//! Exposes the dashboard's data layer to JavaScript. The bundled dataset is
//! parsed on module load; every exported function reads the shared
//! collection and returns plain values or JSON-serializable objects.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `get_city_count()`, `get_city_name(id)`, `get_stats()`
//! - City grid: `list_cities(search, region, sort)` returning card views
//! - Detail modal: `city_detail(id)`
//! - Comparison: `toggle_selection(ids, id)`, `compare_cities(ids)`,
//!   `growth_ranking(ids)`
//! - Charts: `gdp_bar_chart()`, `top_trends(n)`
//! - `load_dataset_json(text)` to swap in another dataset
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { list_cities, compare_cities } from 'citygdp-wasm';
//!
//! async function main() {
//!   await init(); // parses the embedded dataset
//!   const cards = list_cities('zhou', '', 'growth-desc');
//!   console.log(cards);
//!   console.log(compare_cities(['1', '3']));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Selections live in JS as arrays of id strings; `toggle_selection`
//!   returns the updated array together with the outcome, so the 4-city
//!   limit is enforced here rather than in UI code.
//! - Invalid region or sort values reject with an `Error`.
use std::result::Result;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};
use wasm_bindgen::prelude::*;

use citygdp_core::chart;
use citygdp_core::prelude::*;
use serde_json::json;
use serde_wasm_bindgen::{from_value, to_value};

static DB: OnceLock<RwLock<Dataset>> = OnceLock::new();

fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

fn shared() -> &'static RwLock<Dataset> {
    DB.get_or_init(|| {
        let db = match Dataset::embedded() {
            Ok(db) => db.clone(),
            Err(e) => {
                log(&format!("✗ Embedded dataset failed to load: {e}"));
                Dataset::default()
            }
        };
        log(&format!("✓ Loaded {} cities", db.len()));
        RwLock::new(db)
    })
}

fn db() -> RwLockReadGuard<'static, Dataset> {
    shared().read().unwrap_or_else(PoisonError::into_inner)
}

/// Ids from JS (`["1", "3"]`) in selection order, capped at four.
fn selection_from_js(ids: JsValue) -> Result<Selection, JsError> {
    if ids.is_undefined() || ids.is_null() {
        return Ok(Selection::new());
    }
    let ids: Vec<String> = from_value(ids)?;
    Ok(Selection::from_ids(ids.iter().map(String::as_str)))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing citygdp WASM module...");
    shared();
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_city_count() -> usize {
    db().len()
}

#[wasm_bindgen]
pub fn get_city_name(id: &str) -> Option<String> {
    db().find_by_id_or_name(id).map(|c| c.name.clone())
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsError> {
    let db = db();
    let stats = db.stats();
    let out = json!({
        "cities": stats.cities,
        "regions": stats.regions,
        "firstYear": stats.first_year,
        "lastYear": stats.last_year,
        "dashboard": dashboard_stats(db.cities()),
    });
    Ok(to_value(&out)?)
}

/// `[{ slug, label }]` for the region dropdown.
#[wasm_bindgen]
pub fn list_regions() -> js_sys::Array {
    Region::ALL
        .iter()
        .map(|r| {
            let item = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&item, &"slug".into(), &r.slug().into());
            let _ = js_sys::Reflect::set(&item, &"label".into(), &r.label().into());
            JsValue::from(item)
        })
        .collect()
}

#[wasm_bindgen]
pub fn list_sort_keys() -> js_sys::Array {
    SortKey::ALL.iter().map(|k| JsValue::from_str(k.as_str())).collect()
}

/* --------------------------------------------------------------------------
   City Grid & Detail
-------------------------------------------------------------------------- */

/// Filters and sorts the collection. Empty `region`/`sort` mean "all" and
/// "input order".
#[wasm_bindgen]
pub fn list_cities(search: &str, region: &str, sort: &str) -> Result<JsValue, JsError> {
    let query = Query::new()
        .with_search(search)
        .with_region(Region::parse_filter(region)?)
        .with_sort(SortKey::parse_optional(sort)?);
    let db = db();
    let cards = city_cards(&apply_query(db.cities(), &query));
    Ok(to_value(&cards)?)
}

/// Detail view for a city id (or name); `null` when unknown.
#[wasm_bindgen]
pub fn city_detail(id: &str) -> Result<JsValue, JsError> {
    match db().find_by_id_or_name(id) {
        Some(city) => Ok(to_value(&CityDetail::from_city(city))?),
        None => Ok(JsValue::NULL),
    }
}

/* --------------------------------------------------------------------------
   Selection & Comparison
-------------------------------------------------------------------------- */

/// Toggles `id` in `selection` and returns
/// `{ selection, outcome, state, canCompare }`.
#[wasm_bindgen]
pub fn toggle_selection(selection: JsValue, id: &str) -> Result<JsValue, JsError> {
    let mut selection = selection_from_js(selection)?;
    let outcome = selection.toggle(id);
    let state = selection.state();
    let out = json!({
        "selection": selection,
        "outcome": outcome,
        "state": state,
        "canCompare": state.can_compare(),
    });
    Ok(to_value(&out)?)
}

/// Comparison table for the selected ids, or `{ state: "insufficient-selection" }`.
#[wasm_bindgen]
pub fn compare_cities(ids: JsValue) -> Result<JsValue, JsError> {
    let selection = selection_from_js(ids)?;
    let db = db();
    let picked = selection.resolve(db.cities());
    Ok(to_value(&build_comparison_rows(&picked))?)
}

#[wasm_bindgen]
pub fn growth_ranking(ids: JsValue) -> Result<JsValue, JsError> {
    let selection = selection_from_js(ids)?;
    let db = db();
    let picked = selection.resolve(db.cities());
    Ok(to_value(&rank_cities_by_cagr(&picked))?)
}

/* --------------------------------------------------------------------------
   Charts
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn gdp_bar_chart() -> Result<JsValue, JsError> {
    Ok(to_value(&chart::gdp_bar_chart(db().cities()))?)
}

#[wasm_bindgen]
pub fn top_trends(n: usize) -> Result<JsValue, JsError> {
    Ok(to_value(&chart::top_trends(db().cities(), n))?)
}

/* --------------------------------------------------------------------------
   Data Source
-------------------------------------------------------------------------- */

/// Replaces the shared collection with a dataset parsed from `text`.
/// On error the current collection is kept. Returns the new city count.
#[wasm_bindgen]
pub fn load_dataset_json(text: &str) -> Result<usize, JsError> {
    let next = Dataset::from_json_str(text, &LoadOptions::default())?;
    let count = next.len();
    *shared().write().unwrap_or_else(PoisonError::into_inner) = next;
    log(&format!("✓ Loaded {count} cities"));
    Ok(count)
}
