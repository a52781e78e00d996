//! Клиент табличного API для таблицы `clients`.
//!
//! Удалённое хранилище отдаёт строки через REST-диалект PostgREST:
//! окно выборки задаётся `offset`/`limit`, фильтры — `{column}=eq.{value}`,
//! точное число строк приходит в заголовке `Content-Range` при
//! `Prefer: count=exact`.

use contracts::domain::a001_client::aggregate::{Client, ClientId, NewClient};
use gloo_net::http::{Request, Response};

use super::ui::state::page_range;
use crate::shared::api_utils::table_url;

const TABLE: &str = "clients";

/// Текст ошибки для неуспешного ответа. Хранилище кладёт описание в поле
/// `message` тела; если тела нет — остаётся только статус.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => match body.get("message").and_then(|m| m.as_str()) {
            Some(msg) => format!("HTTP {}: {}", status, msg),
            None => format!("HTTP {}", status),
        },
        Err(_) => format!("HTTP {}", status),
    }
}

/// Загрузить страницу клиентов: окно `[page*size, (page+1)*size - 1]`,
/// сортировка по имени по возрастанию, плюс точное число строк таблицы.
pub async fn fetch_clients_page(
    page: usize,
    page_size: usize,
) -> Result<(Vec<Client>, usize), String> {
    let (from, to) = page_range(page, page_size);
    let url = format!(
        "{}?select=*&order=name.asc&offset={}&limit={}",
        table_url(TABLE),
        from,
        to - from + 1
    );

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("Prefer", "count=exact")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let total = response
        .headers()
        .get("Content-Range")
        .as_deref()
        .and_then(parse_content_range_total)
        .ok_or_else(|| "Content-Range header is missing or malformed".to_string())?;

    let rows: Vec<Client> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok((rows, total))
}

/// Вставить одного клиента; хранилище присваивает id и возвращает строку.
pub async fn create_client(dto: &NewClient) -> Result<Client, String> {
    let response = Request::post(&table_url(TABLE))
        .header("Accept", "application/json")
        .header("Prefer", "return=representation")
        .json(std::slice::from_ref(dto))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let rows: Vec<Client> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    rows.into_iter()
        .next()
        .ok_or_else(|| "Insert returned no rows".to_string())
}

/// Обновить клиента по id.
pub async fn update_client(client: &Client) -> Result<(), String> {
    let url = format!(
        "{}?id=eq.{}",
        table_url(TABLE),
        urlencoding::encode(&client.to_string_id())
    );

    let response = Request::patch(&url)
        .header("Accept", "application/json")
        .json(&client.fields)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Удалить клиента по id. Ноль затронутых строк — тоже успех: фильтр
/// просто ничего не нашёл.
pub async fn delete_client(id: &ClientId) -> Result<(), String> {
    let url = format!(
        "{}?id=eq.{}",
        table_url(TABLE),
        urlencoding::encode(&id.as_string())
    );

    let response = Request::delete(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Разобрать суммарное число строк из `Content-Range`: `"10-19/25"` → 25,
/// `"*/0"` → 0. `"*"` вместо числа означает, что точный подсчёт не
/// запрашивался.
fn parse_content_range_total(value: &str) -> Option<usize> {
    let (_, total) = value.rsplit_once('/')?;
    let total = total.trim();
    if total == "*" {
        return None;
    }
    total.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total("10-19/25"), Some(25));
        assert_eq!(parse_content_range_total("0-9/2113"), Some(2113));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
    }

    #[test]
    fn test_parse_content_range_unknown_total() {
        assert_eq!(parse_content_range_total("10-19/*"), None);
    }

    #[test]
    fn test_parse_content_range_malformed() {
        assert_eq!(parse_content_range_total(""), None);
        assert_eq!(parse_content_range_total("10-19"), None);
        assert_eq!(parse_content_range_total("items"), None);
        assert_eq!(parse_content_range_total("10-19/abc"), None);
    }
}
