//! Browser tests: checks the page as Chrome lays it out.
//!
//! Run with: `cargo test --test browser_page -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use vmp_landing::content::{FOOTER, MODULES, QUICK_START, TITLE};

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("browser-page")
}

fn ensure_page_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(env!("CARGO_BIN_EXE_vmp-landing"))
            .args([
                "build",
                "--source",
                output_dir.join("no-source").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run vmp-landing");
        assert!(status.success(), "page generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_page() -> Arc<Tab> {
    ensure_page_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval_string(tab: &Tab, js: &str) -> String {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
        .as_str()
        .expect("value is not a string")
        .to_string()
}

#[test]
#[ignore]
fn quick_start_text_is_verbatim() {
    let tab = load_page();
    let text = eval_string(&tab, "document.querySelector('pre.quick-start').textContent");
    assert_eq!(text, QUICK_START);
}

#[test]
#[ignore]
fn module_rows_pair_name_with_description() {
    let tab = load_page();
    let rows = eval_string(
        &tab,
        r#"JSON.stringify(Array.from(document.querySelectorAll('.module-row')).map(r => [
            r.querySelector('.module-name').textContent,
            r.querySelector('.module-desc').textContent,
        ]))"#,
    );
    let rows: Vec<(String, String)> = serde_json::from_str(&rows).unwrap();
    let expected: Vec<(String, String)> = MODULES
        .iter()
        .map(|m| (m.name.to_string(), m.desc.to_string()))
        .collect();
    assert_eq!(rows, expected);
}

#[test]
#[ignore]
fn heading_and_footer_visible() {
    let tab = load_page();
    assert_eq!(eval_string(&tab, "document.querySelector('h1').innerText"), TITLE);
    assert_eq!(
        eval_string(&tab, "document.querySelector('p.footer').innerText"),
        FOOTER
    );
}

#[test]
#[ignore]
fn module_names_do_not_wrap() {
    let tab = load_page();
    let white_space = eval_string(
        &tab,
        "getComputedStyle(document.querySelector('.module-name')).whiteSpace",
    );
    assert_eq!(white_space, "nowrap");
}
