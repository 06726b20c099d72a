//! HTML pages.

use crate::render::assets::START_SCRIPT_PATH;
use crate::render::catalog::Catalog;
use crate::render::escape_html;
use crate::render::view::ReviewView;
use crate::workflow::normalize::{EMAIL_MAX_CHARS, NOTE_MAX_CHARS, SUBJECT_MAX_CHARS};
use crate::workflow::rules::INACTIVITY_DAYS;

fn layout(catalog: &Catalog, language: &str, title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {site}</title>\n</head>\n<body>\n<main>\n<h1>{title}</h1>\n{body}</main>\n</body>\n</html>\n",
        lang = escape_html(language),
        title = title,
        site = escape_html(catalog.text(language, "site_name")),
        body = body,
    )
}

pub fn entry_page(catalog: &Catalog, language: &str) -> String {
    let t = |key: &'static str| escape_html(catalog.text(language, key));
    let body = format!(
        "<p>{}</p>\n<p><a href=\"/start\">{}</a></p>\n",
        t("index_page_lead"),
        t("button_start"),
    );
    layout(catalog, language, &t("index_page_title"), &body)
}

pub fn start_page(catalog: &Catalog, language: &str, csrf_token: &str) -> String {
    let t = |key: &'static str| escape_html(catalog.text(language, key));
    let options: String = INACTIVITY_DAYS
        .map(|d| format!("<option value=\"{d}\">{d}</option>"))
        .collect();
    let body = format!(
        "<form action=\"/review\" method=\"POST\">\n\
         <input type=\"hidden\" name=\"csrf_token\" value=\"{token}\">\n\
         <label>{subject}<input type=\"text\" name=\"subject\" maxlength=\"{subject_max}\" required></label>\n\
         <label>{note}<textarea name=\"note\" maxlength=\"{note_max}\" required></textarea></label>\n\
         <label>{primary}<input type=\"email\" name=\"primary_email\" maxlength=\"{email_max}\" required></label>\n\
         <label>{secondary}<input type=\"email\" name=\"secondary_email\" maxlength=\"{email_max}\"></label>\n\
         <label>{inactivity}<select name=\"inactivity_time\">{options}</select></label>\n\
         <label><input type=\"checkbox\" id=\"set_expiration\"> {expiration}</label>\n\
         <input type=\"date\" id=\"expiration_date\" name=\"expiration_date\" disabled>\n\
         <button type=\"submit\">{button}</button>\n</form>\n\
         <script src=\"{script}\" defer></script>\n",
        token = escape_html(csrf_token),
        subject = t("start_label_subject"),
        note = t("start_label_note"),
        primary = t("start_label_primary_email"),
        secondary = t("start_label_secondary_email"),
        inactivity = t("start_label_inactivity_time"),
        expiration = t("start_label_expiration_date"),
        button = t("button_review"),
        subject_max = SUBJECT_MAX_CHARS,
        note_max = NOTE_MAX_CHARS,
        email_max = EMAIL_MAX_CHARS,
        options = options,
        script = START_SCRIPT_PATH,
    );
    layout(catalog, language, &t("start_page_title"), &body)
}

pub fn review_page(catalog: &Catalog, view: &ReviewView) -> String {
    let items: String = view
        .items
        .iter()
        .map(|item| format!("<li><p>{}</p></li>\n", item))
        .collect();
    let body = format!(
        "<ul>\n{items}</ul>\n<form action=\"/done\" method=\"POST\">\n\
         <input type=\"hidden\" name=\"csrf_token\" value=\"{token}\">\n\
         <button type=\"submit\">{button}</button>\n</form>\n",
        items = items,
        token = view.csrf_token,
        button = view.confirm_label,
    );
    layout(catalog, &view.language, &view.title, &body)
}

pub fn done_page(catalog: &Catalog, language: &str) -> String {
    let t = |key: &'static str| escape_html(catalog.text(language, key));
    let body = format!("<p>{}</p>\n", t("done_page_information"));
    layout(catalog, language, &t("done_page_title"), &body)
}
