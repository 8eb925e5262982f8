pub const SHOW_POST_STYLES: &str = r#"
/* ── Layout ── */
#p-show-post {
    display: grid;
    grid-template-columns: minmax(0, 3fr) minmax(0, 1fr);
    gap: 1.5rem;
    padding: 1.5rem;
    color: var(--text-primary, #111827);
}

#p-show-post .discussion-panel {
    grid-column: 1 / -1;
}

.subtitle {
    display: block;
    margin: 1rem 0 0.5rem;
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    color: var(--text-secondary, #6b7280);
}

.info {
    font-size: 0.8rem;
    color: var(--text-muted, #9ca3af);
}

/* ── Header ── */
.post-header-row {
    display: flex;
    gap: 1rem;
    align-items: flex-start;
}

.post-header h1 {
    margin: 0 0 0.25rem;
    font-size: 1.5rem;
    word-break: break-word;
}

.vote-counter {
    display: flex;
    flex-direction: column;
    align-items: center;
    min-width: 3rem;
    padding: 0.25rem;
    border: 1px solid var(--border-color, #e5e7eb);
    border-radius: 0.25rem;
}

.vote-counter.voted {
    border-color: var(--accent-bg, #2563eb);
    color: var(--accent-bg, #2563eb);
}

/* ── Edit form ── */
.post-form input,
.post-form textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.5rem;
    font: inherit;
    border: 1px solid var(--border-color, #d1d5db);
    border-radius: 0.25rem;
}

.post-form textarea {
    min-height: 8rem;
    resize: vertical;
}

.post-form.has-error input,
.post-form.has-error textarea {
    border-color: var(--danger-bg, #dc2626);
}

.form-errors {
    margin: 0.25rem 0;
    padding: 0;
    list-style: none;
    font-size: 0.8rem;
    color: var(--danger-bg, #dc2626);
}

/* ── Description ── */
.description p {
    margin: 0 0 0.5rem;
    white-space: pre-wrap;
}

.description.empty {
    font-style: italic;
    color: var(--text-muted, #9ca3af);
}

/* ── Response ── */
.post-response {
    margin-top: 1rem;
    padding: 0.75rem;
    border-left: 3px solid var(--border-color, #d1d5db);
    background: var(--hover-bg, #f9fafb);
}

.status-badge {
    font-size: 0.7rem;
    font-weight: 600;
    padding: 0.1rem 0.4rem;
    border-radius: 0.25rem;
    margin-right: 0.5rem;
    text-transform: uppercase;
}

.status--planned   { background: #dbeafe; color: #1d4ed8; }
.status--started   { background: #fef3c7; color: #b45309; }
.status--completed { background: #dcfce7; color: #15803d; }
.status--declined  { background: #fee2e2; color: #b91c1c; }
.status--duplicate { background: #e5e7eb; color: #374151; }
.status--deleted   { background: #e5e7eb; color: #6b7280; }

/* ── Actions ── */
.post-actions {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.post-actions button,
.response-form button {
    width: 100%;
    padding: 0.5rem;
    border: 1px solid var(--border-color, #d1d5db);
    border-radius: 0.25rem;
    background: var(--button-bg, #ffffff);
    cursor: pointer;
}

.post-actions button.save {
    background: var(--success-bg, #16a34a);
    border-color: var(--success-bg, #16a34a);
    color: white;
}

.post-actions button:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

/* ── Panels ── */
.tag-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-wrap: wrap;
    gap: 0.25rem;
}

.tag {
    font-size: 0.75rem;
    padding: 0.1rem 0.4rem;
    border: 1px solid;
    border-radius: 0.25rem;
}

.comment {
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--border-color, #e5e7eb);
}

.comment p {
    margin: 0.25rem 0 0;
}
"#;
