// Base stylesheet for the HTML renderer.
// Self-contained so pages work without external assets.
pub const BASE_STYLE: &str = r#"
:root {
  --bg: #ffffff;
  --sidebar: #f1f5f9;
  --text: #0f172a;
  --muted: #64748b;
  --accent: #6366f1;
  --accent-hover: #4f46e5;
  --info-bg: #e0f2fe;
  --info-text: #075985;
  --sans: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: var(--sans); line-height: 1.55; }
.page { display: flex; min-height: 100vh; }
aside.sidebar { width: 300px; flex-shrink: 0; background: var(--sidebar); padding: 24px 18px; }
main { flex: 1; padding: 32px 40px; max-width: 760px; margin: 0 auto; }
main.wide { max-width: none; }
.columns { display: flex; gap: 18px; align-items: flex-start; }
.column { min-width: 0; }
.caption { color: var(--muted); font-size: 14px; }
.info { background: var(--info-bg); color: var(--info-text); border-radius: 8px; padding: 12px 16px; margin: 12px 0; }
.widget { display: flex; flex-direction: column; gap: 4px; margin: 10px 0; }
.widget label { font-size: 14px; color: var(--muted); }
.widget input[type=text], .widget textarea { font: inherit; padding: 6px 10px; border: 1px solid #cbd5e1; border-radius: 6px; }
.choice { display: flex; gap: 6px; align-items: center; color: var(--text); }
button.btn { border-radius: 999px; padding: 0.45rem 1.2rem; background: var(--accent); color: #ffffff; border: none; font-weight: 600; cursor: pointer; }
button.btn:hover { background: var(--accent-hover); }
hr { border: none; border-top: 1px solid #e2e8f0; margin: 18px 0; }
"#;
