pub const HOME_STYLES: &str = r#"
/* Portfolio Page Styles */

/* General Layout */
.page {
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
}

.container.narrow {
  max-width: var(--container-narrow);
}

.section {
  padding: var(--space-20) var(--space-4);
}

.section-tinted {
  background-color: var(--surface-tinted);
}

.section-heading {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-16);
  color: var(--text-strong);
}

.subheading {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
  color: var(--text-strong);
}

.two-column {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
}

.two-column.align-center {
  align-items: center;
}

.card-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-8);
}

.stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.stack-sm {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.body-text {
  color: var(--text-secondary);
  line-height: 1.625;
  margin-bottom: var(--space-6);
}

.entry-title {
  font-weight: 600;
  color: var(--text-strong);
}

.muted {
  color: var(--text-secondary);
}

.faint {
  color: var(--text-tertiary);
}

.small {
  font-size: 0.875rem;
}

.centered {
  text-align: center;
}

.spaced {
  margin-top: var(--space-8);
}

.spaced-below-sm {
  margin-bottom: var(--space-2);
}

.spaced-below {
  margin-bottom: var(--space-3);
}

.spaced-below-lg {
  margin-bottom: var(--space-12);
}

.bullet-list {
  list-style: none;
  color: var(--text-secondary);
}

.bullet-list li {
  margin-bottom: var(--space-2);
}

.bullet-list li::before {
  content: "• ";
}

/* Floating Navbar */
.navbar {
  position: fixed;
  top: var(--space-4);
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  width: 100%;
  max-width: var(--navbar-width);
  padding: 0 var(--space-4);
}

.navbar-glass {
  backdrop-filter: blur(12px);
  background-color: var(--navbar-surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-3) var(--space-6);
  box-shadow: var(--shadow-2xl);
}

.navbar-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-brand {
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--text-strong);
}

.nav-links {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-strong);
}

.nav-link.mobile {
  text-align: left;
}

.theme-toggle {
  margin-left: var(--space-4);
  padding: var(--space-2);
  border-radius: var(--radius-full);
  border: 1px solid var(--border-strong);
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
  display: inline-flex;
  transition: color var(--transition-fast) var(--easing-standard);
}

.theme-toggle:hover {
  color: var(--accent);
}

.menu-toggle {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-secondary);
  display: inline-flex;
}

.menu-toggle:hover {
  color: var(--text-strong);
}

.mobile-menu {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  margin-top: var(--space-4);
  padding-top: var(--space-4);
  border-top: 1px solid var(--border);
}

/* Hero Section */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-20) var(--space-4) 0;
}

.hero-content {
  max-width: var(--container-narrow);
  margin: 0 auto;
  text-align: center;
}

.avatar {
  width: 128px;
  height: 128px;
  margin: 0 auto var(--space-6);
  border-radius: var(--radius-xl);
  background: linear-gradient(135deg, var(--gray-700), var(--gray-900));
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.25rem;
  font-weight: 700;
  color: #FFFFFF;
  box-shadow: var(--shadow-2xl);
  overflow: hidden;
}

.avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  background: linear-gradient(to right, var(--text-strong), var(--gray-400));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-headline {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.hero-tagline {
  font-size: 1.125rem;
  color: var(--text-tertiary);
  max-width: 672px;
  margin: 0 auto var(--space-8);
  line-height: 1.625;
}

.hero-actions {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  justify-content: center;
}

/* Contact Section */
.contact-detail {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.socials {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.social-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.social-link:hover {
  color: var(--text-strong);
}

/* Footer */
.site-footer {
  padding: var(--space-8) var(--space-4);
  border-top: 1px solid var(--border);
  text-align: center;
  color: var(--text-tertiary);
}

.load-error {
  max-width: var(--container-narrow);
  margin: var(--space-20) auto;
  padding: 0 var(--space-4);
  color: var(--error);
}

/* Breakpoints */
@media (min-width: 640px) {
  .hero-actions {
    flex-direction: row;
  }

  .hero-title {
    font-size: 4.5rem;
  }
}

@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }

  .menu-toggle,
  .mobile-menu {
    display: none;
  }

  .two-column,
  .card-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .hero-headline {
    font-size: 1.5rem;
  }
}

@media (min-width: 1024px) {
  .card-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}
"#;
