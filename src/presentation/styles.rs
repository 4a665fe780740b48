const TEMPLATE: &str = r#"
.{p}-form-container { max-width: 600px; margin: 0 auto; font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; }
.{p}-form-title { margin: 0 0 16px; font-size: 24px; color: #222; }
.{p}-form { padding: 20px; background: #fff; border-radius: 8px; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1); }
.{p}-field { margin-bottom: 20px; }
.{p}-field > label { display: block; margin-bottom: 5px; font-weight: 500; color: #333; }
.{p}-field input, .{p}-field textarea, .{p}-field select { box-sizing: border-box; width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; }
.{p}-field input:focus, .{p}-field textarea:focus, .{p}-field select:focus { outline: none; border-color: #007bff; box-shadow: 0 0 0 2px rgba(0, 123, 255, 0.25); }
.{p}-field textarea { resize: vertical; min-height: 80px; }
.{p}-radio-group { display: flex; flex-direction: column; gap: 8px; }
.{p}-radio-item, .{p}-checkbox { display: flex; align-items: center; gap: 8px; }
.{p}-checkbox { margin-bottom: 20px; flex-wrap: wrap; }
.{p}-radio-item input, .{p}-checkbox input { width: auto; margin: 0; }
.{p}-error { color: #dc3545; font-size: 12px; margin-top: 4px; }
.{p}-error:empty { display: none; }
.{p}-checkbox .{p}-error { flex-basis: 100%; }
.{p}-submit { background: #007bff; color: #fff; border: none; padding: 12px 24px; border-radius: 4px; font-size: 16px; cursor: pointer; }
.{p}-submit:hover { background: #0056b3; }
.{p}-submit:disabled { background: #8fb8e6; cursor: progress; }
.{p}-message { padding: 10px; margin: 10px 0; border-radius: 4px; font-weight: 500; }
.{p}-message.success { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
.{p}-message.error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
.{p}-load-error { text-align: center; padding: 40px 20px; color: #666; }
.{p}-load-error h3 { margin: 0 0 10px; color: #333; }
.{p}-load-error p { margin: 0; font-size: 14px; }
"#;

/// Bundled stylesheet with every selector scoped to `prefix`.
pub fn stylesheet(prefix: &str) -> String {
    TEMPLATE.replace("{p}", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_use_the_prefix() {
        let css = stylesheet("acme");
        assert!(css.contains(".acme-submit:disabled"));
        assert!(!css.contains("{p}"));
    }
}
