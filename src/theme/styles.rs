//! Global CSS styles for the Newdle desktop client.
//!
//! Covers the page layout, the title bar and the `ui-*` classes used by
//! the `newdle-ui` components.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #ffffff;
  --bg-muted: #f7f7f9;
  --border: #d4d4d5;
  --text-primary: #1b1c1d;
  --text-secondary: rgba(0, 0, 0, 0.6);
  --text-muted: rgba(0, 0, 0, 0.4);

  --accent: #1e70bf;
  --teal: #00b5ad;
  --orange: #f2711c;
  --green: #21ba45;
  --yellow: #fbbd08;
  --red: #db2828;

  --font-sans: 'Lato', 'Helvetica Neue', Arial, sans-serif;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 14px;
  line-height: 1.4285em;
}

a {
  color: var(--accent);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

/* === Pages === */
.home, .newdle-page, .not-found {
  padding: 2rem 1rem;
}

.page-title {
  font-size: 2rem;
  margin-bottom: 1rem;
}

.newdle-list {
  list-style: none;
}

.newdle-list li {
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--border);
}

.participant-count, .empty-state {
  color: var(--text-secondary);
}

.poll-body {
  max-width: 900px;
  margin: 1.5rem auto 0;
}

.final-date {
  font-weight: bold;
  margin-bottom: 1rem;
}

.section-title {
  font-size: 1.2rem;
  margin-bottom: 0.5rem;
}

/* === Title Bar === */
.newdle-title {
  border: 1px solid var(--border);
  border-radius: 4px;
  padding: 1rem 1.5rem;
}

.title-flexbox {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 1rem;
}

.title-header {
  font-size: 1.8rem;
  word-break: break-word;
}

.subtitle {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 0.25rem;
}

.author {
  color: var(--text-secondary);
}

.badges {
  display: flex;
  gap: 0.25rem;
}

.view-options {
  display: flex;
  gap: 0.5rem;
  flex-shrink: 0;
}

.shareable-link {
  display: flex;
  gap: 0.75rem;
  padding-top: 0.75rem;
  word-break: break-all;
}

.shareable-link .legend {
  color: var(--text-muted);
  white-space: nowrap;
}

/* === ui-container / ui-divider === */
.ui-container.text {
  max-width: 700px;
  margin: 0 auto;
}

.ui-divider.fitted {
  border-top: 1px solid var(--border);
  margin: 0.75rem 0 0;
}

/* === ui-btn === */
.ui-btn-group {
  display: inline-flex;
}

.ui-btn-group .ui-popup-anchor + .ui-popup-anchor .ui-btn {
  border-left: none;
  border-top-left-radius: 0;
  border-bottom-left-radius: 0;
}

.ui-btn-group .ui-popup-anchor:not(:last-child) .ui-btn {
  border-top-right-radius: 0;
  border-bottom-right-radius: 0;
}

.ui-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.6rem 0.8rem;
  background: #e0e1e2;
  color: var(--text-secondary);
  border: 1px solid transparent;
  border-radius: 4px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.ui-btn:hover {
  background: #cacbcd;
}

.ui-btn.active {
  background: #c0c1c2;
  color: var(--text-primary);
}

.ui-btn.toggle.active {
  background: var(--green);
  color: #ffffff;
}

.ui-btn.disabled, .ui-btn:disabled {
  opacity: 0.45;
  cursor: default;
  pointer-events: none;
}

/* === ui-label === */
.ui-label {
  display: inline-block;
  padding: 0.3em 0.7em;
  border-radius: 4px;
  font-size: 0.85rem;
  font-weight: bold;
  color: #ffffff;
}

.ui-label.grey { background: #767676; }
.ui-label.teal { background: var(--teal); }
.ui-label.orange { background: var(--orange); }

/* === ui-popup === */
.ui-popup-anchor {
  position: relative;
  display: inline-block;
}

.ui-popup {
  position: absolute;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10;
  padding: 0.5rem 0.8rem;
  white-space: nowrap;
  background: var(--bg);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 4px;
  box-shadow: 0 2px 4px rgba(34, 36, 38, 0.12);
  pointer-events: none;
  visibility: hidden;
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.ui-popup.bottom-center { top: calc(100% + 0.5rem); }
.ui-popup.top-center { bottom: calc(100% + 0.5rem); }

.ui-popup.inverted {
  background: var(--text-primary);
  color: #ffffff;
  border: none;
}

.ui-popup-anchor:hover .ui-popup.hover,
.ui-popup.open {
  visibility: visible;
  opacity: 1;
}

.ui-icon {
  display: block;
}

/* === Answers === */
.answer-list {
  list-style: none;
}

.answer-slot {
  display: flex;
  justify-content: space-between;
  padding: 0.5rem 0.75rem;
  border-bottom: 1px solid var(--border);
}

.answer-slot.final {
  background: rgba(33, 186, 69, 0.12);
  font-weight: bold;
}

.answer-grid {
  border-collapse: collapse;
  width: 100%;
}

.answer-grid th, .answer-grid td {
  border: 1px solid var(--border);
  padding: 0.4rem 0.6rem;
  text-align: center;
}

.answer-grid .participant-name {
  text-align: left;
}

.answer-available { background: rgba(33, 186, 69, 0.25); }
.answer-ifneedbe { background: rgba(251, 189, 8, 0.25); }
.answer-unavailable { background: rgba(219, 40, 40, 0.15); }

/* === Mobile === */
@media (max-width: 768px) {
  .title-flexbox {
    flex-direction: column;
  }

  .newdle-title {
    padding: 1rem;
  }
}
"#;
