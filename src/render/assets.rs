//! Static script served next to the pages.

/// Path the start page loads its script from.
pub const START_SCRIPT_PATH: &str = "/assets/start.js";

/// Enables the expiration date input only while its checkbox is ticked.
/// The input starts out disabled, so an untouched date is never submitted.
pub const START_SCRIPT: &str = r#"document.addEventListener("DOMContentLoaded", function () {
  var toggle = document.getElementById("set_expiration");
  var date = document.getElementById("expiration_date");
  if (!toggle || !date) {
    return;
  }
  var sync = function () {
    date.disabled = !toggle.checked;
    date.required = toggle.checked;
  };
  toggle.addEventListener("change", sync);
  sync();
});
"#;
