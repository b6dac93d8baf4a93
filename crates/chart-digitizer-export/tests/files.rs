use chart_digitizer_core::ImagePoint;
use chart_digitizer_export::{
    load_document, project_all, save_document, write_export_file, ExportFormat, ExportIoError,
    ExportOptions,
};
use chart_digitizer_series::{DigitizationDocument, ImageInfo};

fn sample_document() -> DigitizationDocument {
    let image = ImageInfo::new(500, 400).with_source("fig3.png");
    let mut doc = DigitizationDocument::with_image(image);
    let axes = doc.axes_mut();
    axes.set_title("Fig. 3");
    axes.x.set_label("Load [kN]");
    axes.x.set_points(ImagePoint::new(50.0, 350.0), ImagePoint::new(450.0, 350.0));
    axes.x.set_min(Some(0.0));
    axes.x.set_max(Some(8.0));
    axes.y.set_label("Strain");
    axes.y.set_points(ImagePoint::new(50.0, 350.0), ImagePoint::new(50.0, 50.0));
    axes.y.set_min(Some(0.0));
    axes.y.set_max(Some(0.3));

    let store = doc.series_mut();
    store.add_series("specimen A", "#1f77b4");
    for (x, y) in [(50.0, 350.0), (150.0, 300.0), (250.0, 200.0)] {
        store.add_point_to_active_series(ImagePoint::new(x, y));
    }
    doc
}

#[test]
fn saved_document_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");
    let doc = sample_document();
    save_document(&path, &doc).unwrap();
    let loaded = load_document(&path).unwrap();
    assert_eq!(loaded, doc);
    assert_eq!(project_all(&loaded), project_all(&doc));
}

#[test]
fn csv_file_has_one_row_per_point() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let data = project_all(&sample_document());
    let format = ExportFormat::from_path(&path).unwrap();
    assert_eq!(format, ExportFormat::Csv);
    write_export_file(&path, &data, format, &ExportOptions::default()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "specimen A,#1f77b4,50.00,350.00,0.00,0.00");
    assert_eq!(lines[3], "specimen A,#1f77b4,250.00,200.00,4.00,0.15");
}

#[test]
fn json_file_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.JSON");
    let data = project_all(&sample_document());
    let format = ExportFormat::from_path(&path).unwrap();
    write_export_file(&path, &data, format, &ExportOptions::default()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let back: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back["xAxisLabel"], "Load [kN]");
    assert_eq!(back["series"][0]["points"].as_array().map(Vec::len), Some(3));
}

#[test]
fn unknown_extension_and_missing_file_are_errors() {
    assert!(matches!(
        ExportFormat::from_path("data.xlsx"),
        Err(ExportIoError::UnknownFormat(_))
    ));
    assert!(matches!(
        load_document("/definitely/not/here.json"),
        Err(ExportIoError::Io(_))
    ));
}

#[test]
fn document_with_repeated_series_id_does_not_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    std::fs::write(
        &path,
        r##"{ "series": { "series": [
            { "id": "a", "name": "one", "color": "#000", "points": [] },
            { "id": "a", "name": "two", "color": "#111", "points": [] }
        ] } }"##,
    )
    .unwrap();
    assert!(matches!(load_document(&path), Err(ExportIoError::Json(_))));
}
