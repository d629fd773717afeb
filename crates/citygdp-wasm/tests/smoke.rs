use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use citygdp_wasm::{get_city_count, get_city_name};

#[wasm_bindgen_test]
fn can_get_city_count() {
    #[cfg(target_arch = "wasm32")]
    citygdp_wasm::start();

    let count = get_city_count();
    assert!(count > 0, "expected at least one city, got {count}");
}

#[wasm_bindgen_test]
fn can_lookup_city_name() {
    #[cfg(target_arch = "wasm32")]
    citygdp_wasm::start();

    assert_eq!(get_city_name("1").as_deref(), Some("上海"));
    assert_eq!(get_city_name("shenzhen").as_deref(), Some("深圳"));
    assert!(get_city_name("atlantis").is_none());
}
