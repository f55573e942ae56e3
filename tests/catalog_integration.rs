//! Integration tests for catalog normalization and editing.

use std::io::Write;

use tessera::{
    Catalog, Category, CollectingReporter, Designer, Headless, Notice, Options, RawTile,
    TesseraError, Tile, XmlBackend, normalize, normalize_catalog,
};

const CATALOG_JSON: &str = r##"[
  {
    "id": "cement",
    "name": "Cement Tiles",
    "tiles": [
      {
        "id": "cement-1",
        "name": "Quatrefoil",
        "svg": "<svg viewBox=\"0 0 100 100\"><path id=\"field\" d=\"M0 0h100v100H0z\" fill=\"#f2e8cf\"/><path d=\"M50 10a40 40 0 1 0 0.1 0z\" fill=\"#386641\"/></svg>"
      },
      {
        "id": "cement-2",
        "name": "Broken export",
        "svg": "<svg viewBox=\"0 0 100 100\"><path d=\"M0 0\"></svg>"
      },
      {
        "id": "cement-3",
        "name": "Diagonal",
        "svg": "<svg width=\"120px\" height=\"120px\"><path d=\"M0 0L100 100\" fill=\"none\"/></svg>"
      }
    ]
  },
  {
    "id": "porcelain",
    "name": "Porcelain",
    "tiles": [
      {
        "id": "porcelain-1",
        "name": "Plain",
        "svgData": {
          "viewBox": "0 0 10 10",
          "width": 10,
          "height": 10,
          "paths": [{ "id": "face", "d": "M0 0h10v10H0z", "fill": "#ffffff" }]
        }
      }
    ]
  }
]"##;

#[test]
fn test_one_bad_tile_does_not_sink_the_batch() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let reporter = CollectingReporter::new();
    let normalized = normalize_catalog(&catalog, &XmlBackend, &Options::default(), &reporter);

    let cement = normalized.category("cement").unwrap();
    assert!(cement.tiles[0].is_structured());
    assert!(cement.tiles[2].is_structured());
    assert_eq!(&cement.tiles[1], &catalog.categories()[0].tiles[1]);
    assert!(matches!(&cement.tiles[1], Tile::Raw(_)));

    let diagonal = cement.tiles[2].document().unwrap();
    assert_eq!(diagonal.width, Some(120));
    assert_eq!(diagonal.view_box, "0 0 100 100");
    assert_eq!(diagonal.paths[0].fill, "#000000");

    let notices = reporter.notices();
    assert_eq!(notices.len(), 1);
    match &notices[0] {
        Notice::TileParseFailed { tile_id, cause } => {
            assert_eq!(tile_id, "cement-2");
            assert!(cause.starts_with("Invalid SVG"), "{}", cause);
        }
        other => panic!("unexpected notice {:?}", other),
    }

    assert_eq!(normalized.category("porcelain"), catalog.category("porcelain"));
}

#[test]
fn test_deeply_nested_tile_fails_alone() {
    let depth = 100_000;
    let deep = format!(
        "<svg>{}<path d=\"M0 0\"/>{}</svg>",
        "<g>".repeat(depth),
        "</g>".repeat(depth)
    );
    let catalog = Catalog::new(vec![Category {
        id: "stress".into(),
        name: "Stress".into(),
        tiles: vec![
            Tile::Raw(RawTile {
                id: "deep".into(),
                name: "Deep".into(),
                svg: deep,
            }),
            Tile::Raw(RawTile {
                id: "flat".into(),
                name: "Flat".into(),
                svg: r#"<svg><path d="M0 0h1v1z"/></svg>"#.into(),
            }),
        ],
    }]);

    let reporter = CollectingReporter::new();
    let out = normalize_catalog(&catalog, &XmlBackend, &Options::default(), &reporter);

    let stress = out.category("stress").unwrap();
    assert!(!stress.tiles[0].is_structured());
    assert!(stress.tiles[1].is_structured());
    assert_eq!(reporter.len(), 1);
    assert!(matches!(&reporter.notices()[0], Notice::TileParseFailed { tile_id, .. } if tile_id == "deep"));
}

#[test]
fn test_normalizing_twice_changes_nothing() {
    let once = normalize(&Catalog::from_json(CATALOG_JSON).unwrap());
    let reporter = CollectingReporter::new();
    let twice = normalize_catalog(&once, &XmlBackend, &Options::default(), &reporter);
    assert_eq!(twice, once);
    // only the broken tile is retried
    assert_eq!(reporter.len(), 1);
}

#[test]
fn test_headless_catalog_untouched() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let reporter = CollectingReporter::new();
    let out = normalize_catalog(&catalog, &Headless, &Options::default(), &reporter);
    assert_eq!(out, catalog);
    assert_eq!(reporter.notices(), vec![Notice::CatalogSkipped]);
}

#[test]
fn test_designer_session_round_trip() {
    let mut designer = Designer::new(normalize(&Catalog::from_json(CATALOG_JSON).unwrap()));

    assert!(designer.select_category("cement"));
    let selectable: Vec<_> = designer
        .selected_category()
        .unwrap()
        .selectable_tiles()
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(selectable, ["cement-1", "cement-3"]);

    assert!(designer.select_tile("cement-1"));
    assert_eq!(designer.path_colors()["path-1"], "#386641");
    designer.set_path_color("path-1", "#bc4749");
    assert!(designer.save());

    let saved = designer.into_catalog();
    let doc = saved.tile("cement", "cement-1").unwrap().document().unwrap();
    let fills: Vec<_> = doc.paths.iter().map(|p| p.fill.as_str()).collect();
    assert_eq!(fills, ["#f2e8cf", "#bc4749"]);

    let json = serde_json::to_string(&saved).unwrap();
    assert_eq!(Catalog::from_json(&json).unwrap(), saved);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.categories().len(), 2);
    assert_eq!(catalog.tile("cement", "cement-3").unwrap().name(), "Diagonal");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(dir.path().join("tiles.json")).unwrap_err();
    assert!(matches!(err, TesseraError::Io(_)));
}
