// the light palette sits on :root and the dark palette overrides it while the root carries
// the "dark" marker class
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Neutrals */
  --gray-100: #F3F4F6;
  --gray-200: #E5E7EB;
  --gray-300: #D1D5DB;
  --gray-400: #9CA3AF;
  --gray-500: #6B7280;
  --gray-600: #4B5563;
  --gray-700: #374151;
  --gray-800: #1F2937;
  --gray-900: #111827;
  --gray-950: #030712;

  --accent: #FACC15;
  --error: #EF4444;
  --success: #10B981;

  /* Background and Surface Colors */
  --background: var(--gray-100);
  --surface: rgba(255, 255, 255, 0.7);
  --surface-hover: rgba(255, 255, 255, 0.9);
  --surface-tinted: rgba(229, 231, 235, 0.5);
  --navbar-surface: rgba(255, 255, 255, 0.8);
  --input-surface: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--gray-900);
  --text-secondary: var(--gray-600);
  --text-tertiary: var(--gray-500);
  --text-strong: #000000;

  /* Border Colors */
  --border: rgba(209, 213, 219, 0.5);
  --border-strong: var(--gray-300);
  --border-focus: var(--gray-500);

  /* Buttons and Badges */
  --button-primary: var(--gray-900);
  --button-primary-hover: var(--gray-700);
  --button-primary-text: #FFFFFF;
  --badge-surface: var(--gray-200);
  --badge-text: var(--gray-700);

  /* Layout */
  --navbar-width: 672px;
  --container-width: 1152px;
  --container-narrow: 896px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-2xl: 0 25px 50px -12px rgba(0, 0, 0, 0.25);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

:root.dark {
  --background: var(--gray-950);
  --surface: rgba(17, 24, 39, 0.5);
  --surface-hover: rgba(17, 24, 39, 0.7);
  --surface-tinted: rgba(17, 24, 39, 0.3);
  --navbar-surface: rgba(17, 24, 39, 0.8);
  --input-surface: var(--gray-800);

  --text-primary: var(--gray-100);
  --text-secondary: var(--gray-400);
  --text-tertiary: var(--gray-500);
  --text-strong: #FFFFFF;

  --border: rgba(31, 41, 55, 0.5);
  --border-strong: var(--gray-700);
  --border-focus: var(--gray-500);

  --button-primary: #FFFFFF;
  --button-primary-hover: var(--gray-200);
  --button-primary-text: var(--gray-900);
  --badge-surface: var(--gray-800);
  --badge-text: var(--gray-300);
}"#;
