/// Выгрузка таблицы в CSV-файл, который открывается в Excel
use contracts::shared::date_utils::today_iso;
use contracts::shared::export::{export_filename, rows_to_csv, ExportRow};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Собирает CSV из строк и инициирует скачивание `<prefix>-<дата>.csv`
pub fn export_rows(rows: &[ExportRow], prefix: &str) -> Result<(), String> {
    let csv_content = rows_to_csv(rows).map_err(|e| e.to_string())?;
    let filename = export_filename(prefix, &today_iso());

    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, &filename)?;

    log::debug!("exported {} rows to {}", rows.len(), filename);
    Ok(())
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Временная ссылка: добавить в DOM, кликнуть, удалить
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
