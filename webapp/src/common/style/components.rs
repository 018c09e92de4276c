pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  font-size: 0.875rem;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  background: none;
  color: inherit;
  outline: none;
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-color: var(--button-primary);
  color: var(--button-primary-text);
}

.btn-primary:hover {
  background-color: var(--button-primary-hover);
}

.btn-outline {
  border-color: var(--border-strong);
  color: var(--text-secondary);
}

.btn-outline:hover {
  background-color: var(--surface-hover);
}

.btn-ghost {
  padding: 0;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-strong);
}

.btn-lg {
  padding: var(--space-3) var(--space-8);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-sm);
}

.card-hover {
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.card-hover:hover {
  background-color: var(--surface-hover);
}

.card-content {
  padding: var(--space-6);
}

.card-content.padded-lg {
  padding: var(--space-8);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-3);
  color: var(--text-strong);
}

/* Badges */
.badge-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.badge {
  display: inline-flex;
  align-items: center;
  padding: 2px 10px;
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
  border: 1px solid transparent;
}

.badge-secondary {
  background-color: var(--badge-surface);
  color: var(--badge-text);
}

.badge-outline {
  border-color: var(--border-strong);
  color: var(--text-secondary);
}

/* Icons */
.icon {
  width: 20px;
  height: 20px;
  flex-shrink: 0;
}

.icon-lg {
  width: 24px;
  height: 24px;
}

.icon-leading {
  margin-right: var(--space-2);
}

.icon-trailing {
  width: 16px;
  height: 16px;
  margin-left: var(--space-2);
}

/* Form Elements */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.form-label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: var(--space-2);
}

.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  background-color: var(--input-surface);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius-lg);
  color: var(--text-strong);
  font: inherit;
}

.form-input:focus {
  outline: none;
  border-color: var(--border-focus);
}

.field-error {
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--error);
}

.form-status {
  font-size: 0.875rem;
  color: var(--success);
  text-align: center;
}
"#;
