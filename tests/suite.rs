// Integration suite for the storefront engine; exercises catalog loading,
// the filter/selection pipeline and the vitrine binary end to end.
mod support;

use anyhow::Result;
use serde_json::{Value, json};
use support::{
    bundled_catalogs, catalog_args, run_command, stdout_of, vitrine, write_catalog,
};
use tempfile::TempDir;
use url::Url;
use vitrine::{
    Action, CatalogStore, Category, EntryId, FacetValue, FilterState, ItemState, StorefrontState,
    compose_inquiry,
};

fn bundled_store() -> Result<CatalogStore> {
    CatalogStore::load(&bundled_catalogs())
}

#[test]
fn bundled_catalogs_form_one_snapshot() -> Result<()> {
    let store = bundled_store()?;
    assert_eq!(store.len(), 6);
    let first_item = store.entry(&EntryId::from("item-10")).expect("item present");
    assert_eq!(first_item.category, Category::Part);
    assert_eq!(
        first_item.detail.as_deref(),
        Some("Par de escovas para motores universais")
    );
    let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids[..3], ["1", "2", "3"]);
    Ok(())
}

#[test]
fn identity_filter_keeps_every_entry() -> Result<()> {
    let store = bundled_store()?;
    let filter = FilterState::default();
    assert_eq!(filter.apply(store.entries()).len(), store.len());
    Ok(())
}

#[test]
fn query_miss_excludes_regardless_of_facets() -> Result<()> {
    let store = bundled_store()?;
    let facet_sets = [
        FilterState::default(),
        FilterState::default().toggle_facet(FacetValue::Category(Category::Equipment)),
        FilterState::default()
            .toggle_facet(FacetValue::State(ItemState::New))
            .toggle_facet(FacetValue::Category(Category::Part)),
    ];
    for filter in facet_sets {
        let filter = filter.with_query("retroescavadeira");
        assert!(
            store.entries().iter().all(|entry| !filter.matches(entry)),
            "no entry name contains the query"
        );
    }
    Ok(())
}

#[test]
fn reducer_drives_selection_into_message() -> Result<()> {
    let store = bundled_store()?;
    let pick = |id: &str| Action::ToggleEntry(store.entry(&EntryId::from(id)).unwrap().clone());
    let state = StorefrontState::default().reduce_all([pick("1"), pick("2"), pick("1"), pick("item-12")]);
    let names = state.selection.names();
    assert_eq!(names, ["Serra Circular", "Óleo Lubrificante"]);

    let evening = chrono::NaiveTime::from_hms_opt(19, 5, 0).unwrap();
    assert_eq!(
        compose_inquiry(&state.selection, &evening),
        "Boa noite, estou interessado nos itens: Serra Circular, Óleo Lubrificante. Teria em estoque?"
    );
    Ok(())
}

#[test]
fn validate_passes_for_bundled_catalogs() -> Result<()> {
    let mut cmd = vitrine();
    cmd.arg("validate");
    let output = run_command(cmd)?;
    assert!(stdout_of(&output).contains("validate: PASS (6 entries)"));
    Ok(())
}

#[test]
fn list_filters_by_category_and_marks_selection() -> Result<()> {
    let mut cmd = vitrine();
    cmd.arg("list");
    catalog_args(&mut cmd, &bundled_catalogs());
    cmd.args(["--category", "Peça", "--select", "item-11"]);
    let stdout = stdout_of(&run_command(cmd)?);

    assert!(stdout.contains("visible  : 2"), "got:\n{stdout}");
    assert!(stdout.contains("filters  : active"));
    assert!(stdout.contains("[ ] item-10  Escova de Carvão"));
    assert!(stdout.contains("[x] item-11  Disco de Serra 7 1/4"));
    assert!(!stdout.contains("Furadeira"));
    Ok(())
}

#[test]
fn list_repeated_category_keeps_filter() -> Result<()> {
    let mut cmd = vitrine();
    cmd.args(["list", "--category", "Peça", "--category", "Peça"]);
    let stdout = stdout_of(&run_command(cmd)?);
    assert!(stdout.contains("visible  : 2"), "got:\n{stdout}");
    assert!(stdout.contains("filters  : active"));
    assert!(!stdout.contains("Furadeira"));
    Ok(())
}

#[test]
fn list_accepts_named_facet_pairs() -> Result<()> {
    let mut cmd = vitrine();
    cmd.args([
        "list", "--json", "--facet", "state=Semi-novo", "--state", "Semi-novo",
    ]);
    let value: Value = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    let ids: Vec<&str> = value
        .as_array()
        .expect("array output")
        .iter()
        .filter_map(|entry| entry.get("id").and_then(Value::as_str))
        .collect();
    assert_eq!(ids, ["2"]);

    let mut bad = vitrine();
    bad.args(["list", "--facet", "color=azul"]);
    let err = run_command(bad).expect_err("unknown facet name");
    assert!(err.to_string().contains("Unknown facet: color"), "got {err}");
    Ok(())
}

#[test]
fn list_json_honours_query() -> Result<()> {
    let mut cmd = vitrine();
    cmd.args(["list", "--json", "--query", "SERRA"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<&str> = value
        .as_array()
        .expect("array output")
        .iter()
        .filter_map(|entry| entry.get("id").and_then(Value::as_str))
        .collect();
    assert_eq!(ids, ["2", "item-11"]);
    Ok(())
}

#[test]
fn facets_lists_panel_values() -> Result<()> {
    let mut cmd = vitrine();
    cmd.arg("facets");
    let stdout = stdout_of(&run_command(cmd)?);
    assert!(stdout.contains("Equipamento=3"));
    assert!(stdout.contains("Peça=2"));
    assert!(stdout.contains("Semi-novo=1"));
    assert!(stdout.contains("Bosch=1"));
    Ok(())
}

#[test]
fn inquire_prints_label_message_and_link() -> Result<()> {
    let mut cmd = vitrine();
    cmd.args([
        "inquire", "--select", "1", "--select", "item-11", "--hour", "9",
    ]);
    let stdout = stdout_of(&run_command(cmd)?);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "got:\n{stdout}");
    assert_eq!(lines[0], "Solicitar itens selecionados");
    let message = "Bom dia, estou interessado nos itens: Furadeira de Impacto, Disco de Serra 7 1/4. Teria em estoque?";
    assert_eq!(lines[1], message);

    let link = Url::parse(lines[2])?;
    assert!(lines[2].starts_with("https://api.whatsapp.com/send/?phone=%2B5547992531701&"));
    let text = link
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned());
    assert_eq!(text.as_deref(), Some(message));
    Ok(())
}

#[test]
fn inquire_uses_phone_from_environment() -> Result<()> {
    let mut cmd = vitrine();
    cmd.env("VITRINE_PHONE", "+551140040000");
    cmd.args(["inquire", "--select", "3", "--hour", "15"]);
    let stdout = stdout_of(&run_command(cmd)?);
    assert!(stdout.contains("Solicitar item selecionado\n"));
    assert!(stdout.contains("Boa tarde, estou interessado no item: Compressor de Ar. Teria em estoque?"));
    assert!(stdout.contains("phone=%2B551140040000"));
    Ok(())
}

#[test]
fn inquire_rejects_empty_selection() -> Result<()> {
    let mut cmd = vitrine();
    cmd.args(["inquire", "--select", "2", "--select", "2", "--hour", "10"]);
    let err = run_command(cmd).expect_err("double toggle leaves nothing selected");
    assert!(err.to_string().contains("Nothing selected"), "got {err}");
    Ok(())
}

#[test]
fn inquire_rejects_unknown_ids() -> Result<()> {
    let mut cmd = vitrine();
    cmd.args(["inquire", "--select", "999"]);
    let err = run_command(cmd).expect_err("unknown id");
    assert!(err.to_string().contains("Unknown entry id: 999"), "got {err}");
    Ok(())
}

#[test]
fn catalogs_from_environment_are_concatenated() -> Result<()> {
    let dir = TempDir::new()?;
    let first = write_catalog(
        &dir,
        "first.json",
        &json!([{"id": 1, "name": "Lixadeira", "category": "Equipamento"}]),
    )?;
    let second = write_catalog(
        &dir,
        "second.json",
        &json!({"id": "x", "name": "Lixa 120", "category": "Peça"}),
    )?;
    let mut cmd = vitrine();
    cmd.env(
        "VITRINE_CATALOGS",
        format!("{},{}", first.display(), second.display()),
    );
    cmd.args(["list", "--json"]);
    let value: Value = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    let names: Vec<&str> = value
        .as_array()
        .expect("array output")
        .iter()
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, ["Lixadeira", "Lixa 120"]);
    Ok(())
}

#[test]
fn validate_rejects_duplicate_ids_across_sources() -> Result<()> {
    let dir = TempDir::new()?;
    let equipments = write_catalog(
        &dir,
        "equipments.json",
        &json!([{"id": 7, "name": "Serra", "category": "Equipamento"}]),
    )?;
    let items = write_catalog(
        &dir,
        "items.json",
        &json!([{"id": "7", "name": "Disco", "category": "Peça"}]),
    )?;
    let mut cmd = vitrine();
    cmd.arg("validate");
    catalog_args(&mut cmd, &[equipments, items]);
    let err = run_command(cmd).expect_err("duplicate ids must fail");
    assert!(err.to_string().contains("duplicate entry id 7"), "got {err}");
    Ok(())
}

#[test]
fn catalog_ids_beyond_i64_load_intact() -> Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.path().join("wide.json");
    std::fs::write(
        &catalog,
        r#"[{"id": 18446744073709551615, "name": "Serra", "category": "Equipamento"}]"#,
    )?;
    let mut cmd = vitrine();
    cmd.args(["list", "--json"]);
    catalog_args(&mut cmd, &[&catalog]);
    let value: Value = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    assert_eq!(value[0]["id"], "18446744073709551615");
    Ok(())
}

#[test]
fn validate_reports_schema_violations_with_file() -> Result<()> {
    let dir = TempDir::new()?;
    let broken = write_catalog(
        &dir,
        "broken.json",
        &json!([
            {"id": 1, "name": "Serra", "category": "Equipamento"},
            {"id": 2, "name": "Disco", "category": 4}
        ]),
    )?;
    let mut cmd = vitrine();
    cmd.arg("validate");
    catalog_args(&mut cmd, &[&broken]);
    let err = run_command(cmd).expect_err("schema violation must fail");
    let message = err.to_string();
    assert!(message.contains("failed schema validation"), "got {message}");
    assert!(message.contains("entry #2"), "got {message}");
    assert!(message.contains("broken.json"), "got {message}");
    Ok(())
}
