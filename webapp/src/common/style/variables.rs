pub const CSS_VARIABLES: &str = r#"
:root {
  --primary: #E11D48;
  --primary-dark: #BE123C;
  --primary-tint: rgba(225, 29, 72, 0.12);

  --neutral-100: #F4F4F5;
  --neutral-200: #E4E4E7;
  --neutral-300: #D4D4D8;
  --neutral-500: #71717A;
  --neutral-700: #3F3F46;
  --neutral-900: #18181B;

  --error: #DC2626;
  --rating: #F59E0B;

  --background: var(--neutral-100);
  --surface: #FFFFFF;

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);

  --border: var(--neutral-200);

  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
