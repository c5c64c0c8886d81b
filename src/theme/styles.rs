//! Global CSS styles for Crypto World.
//!
//! Colors are custom properties on `.app.dark` / `.app.light`, so every rule
//! below is theme-agnostic.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand green */
  --green-300: #86efac;
  --green-400: #4ade80;
  --green-500: #22c55e;
  --green-600: #16a34a;
  --green-700: #15803d;
  --green-950: #052e16;

  /* Semantic */
  --danger: #ef4444;
  --danger-soft: rgba(239, 68, 68, 0.2);
  --success-soft: rgba(34, 197, 94, 0.2);

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-4xl: 2.25rem;
  --text-6xl: 3.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --radius: 0.75rem;
}

.app.dark {
  --background: #030712;
  --foreground: #f9fafb;
  --card: rgba(17, 24, 39, 0.5);
  --muted-foreground: #9ca3af;
  --border: rgba(255, 255, 255, 0.1);
  --surface: rgba(3, 7, 18, 0.5);
  --surface-hover: rgba(3, 7, 18, 0.7);
  --heading-from: #ffffff;
  color-scheme: dark;
}

.app.light {
  --background: #ffffff;
  --foreground: #0a0a0a;
  --card: rgba(249, 250, 251, 0.7);
  --muted-foreground: #6b7280;
  --border: rgba(0, 0, 0, 0.1);
  --surface: rgba(243, 244, 246, 0.7);
  --surface-hover: rgba(229, 231, 235, 0.9);
  --heading-from: #0a0a0a;
  color-scheme: light;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

/* === App Shell === */
.app {
  min-height: 100vh;
  background: var(--background);
  color: var(--foreground);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.container {
  width: 100%;
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 1rem;
}

/* === Utilities === */
.muted { color: var(--muted-foreground); }
.accent { color: var(--green-400); }
.strong { font-weight: 600; }
.small { font-size: var(--text-sm); }
.tiny { font-size: var(--text-xs); }
.centered { text-align: center; }
.large { font-size: var(--text-2xl); }
.grow { flex: 1; }

.row {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}
.row.gap { gap: 0.75rem; }
.row.between { justify-content: space-between; }

.stack {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.grid {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: 1fr;
  margin-bottom: 3rem;
}

@media (min-width: 768px) {
  .grid-2, .grid-3 { grid-template-columns: repeat(2, 1fr); }
  .grid-4 { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
  .grid-4 { grid-template-columns: repeat(4, 1fr); }
}

.card-content .grid { margin-bottom: 0; gap: 1rem; }

.icon { flex-shrink: 0; }

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background: color-mix(in srgb, var(--background) 80%, transparent);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 1rem;
  padding-bottom: 1rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  transition: transform var(--transition-fast);
}
.brand:hover { transform: scale(1.05); }

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  background: linear-gradient(to right, var(--green-400), var(--green-600));
  display: flex;
  align-items: center;
  justify-content: center;
  color: #fff;
  font-weight: 700;
}

.brand-name {
  font-size: var(--text-xl);
  font-weight: 700;
  background: linear-gradient(to right, var(--green-400), var(--green-600));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: none;
  align-items: center;
  gap: 1.5rem;
}

.nav-link {
  animation: slide-down 0.4s ease both;
  transition: color var(--transition-fast), transform var(--transition-fast);
}
.nav-link:hover {
  color: var(--green-400);
  transform: translateY(-2px);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.theme-toggle { display: none; }
.theme-toggle .icon { transition: transform var(--transition-normal); }
.theme-toggle:hover .icon { transform: rotate(180deg); }

@media (min-width: 640px) {
  .theme-toggle { display: inline-flex; }
}

@media (min-width: 768px) {
  .nav-links { display: flex; }
  .menu-trigger { display: none; }
}

/* === Mobile Sheet === */
.sheet-backdrop {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: rgba(0, 0, 0, 0.6);
  animation: fade-in 0.2s ease both;
}

.sheet {
  position: fixed;
  top: 0;
  bottom: 0;
  right: 0;
  width: 16rem;
  z-index: 70;
  padding: 1.5rem;
  background: var(--background);
  border-left: 1px solid var(--border);
  animation: slide-in-right 0.3s ease both;
}

.sheet-header {
  display: flex;
  justify-content: flex-end;
}

.sheet-links {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.sheet-link {
  font-size: var(--text-lg);
  animation: slide-in-right 0.3s ease both;
}
.sheet-link:hover { color: var(--green-400); }

.sheet-theme-toggle { width: fit-content; gap: 0.5rem; }

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost, .icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 0.5rem;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast), border-color var(--transition-fast);
}

.btn-primary {
  border: 0;
  color: #fff;
  background: linear-gradient(to right, var(--green-500), var(--green-600));
}
.btn-primary:hover:not(:disabled) {
  background: linear-gradient(to right, var(--green-600), var(--green-700));
}

.btn-outline {
  background: transparent;
  color: var(--green-400);
  border: 1px solid rgba(34, 197, 94, 0.3);
}
.btn-outline:hover { background: rgba(34, 197, 94, 0.1); }

.btn-ghost, .icon-btn {
  background: transparent;
  color: inherit;
  border: 0;
}
.btn-ghost:hover, .icon-btn:hover { background: var(--surface-hover); }
.btn-ghost.accent { color: var(--green-400); }
.btn-ghost.accent:hover { color: var(--green-300); }

.btn-sm { padding: 0.375rem 0.75rem; font-size: var(--text-sm); }
.btn-md { padding: 0.5rem 1rem; }
.btn-lg { padding: 1.25rem 2rem; font-size: var(--text-lg); }
.icon-btn { padding: 0.375rem; }

button:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.cta .cta-arrow { display: inline-flex; transition: transform var(--transition-fast); }
.cta:hover .cta-arrow { transform: translateX(5px); }

/* === Input Fields === */
.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border-radius: 0.5rem;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--foreground);
  font: inherit;
  outline: none;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}
.input-field:focus {
  border-color: var(--green-500);
  box-shadow: 0 0 0 3px rgba(34, 197, 94, 0.25);
}
.input-field::placeholder { color: var(--muted-foreground); }

.search-input-wrapper { position: relative; }
.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--muted-foreground);
  display: inline-flex;
}
.search-input { padding-left: 2.5rem; }

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.125rem 0.625rem;
  border-radius: 9999px;
  font-size: var(--text-xs);
  font-weight: 600;
  background: var(--green-600);
  color: #fff;
}
.badge-secondary { background: var(--surface); color: var(--foreground); }
.badge-success { background: var(--success-soft); color: var(--green-400); }
.badge-destructive { background: var(--danger); color: #fff; }

.tone-orange  { background: rgba(249, 115, 22, 0.2); color: #fb923c; }
.tone-blue    { background: rgba(59, 130, 246, 0.2); color: #60a5fa; }
.tone-purple  { background: rgba(168, 85, 247, 0.2); color: #c084fc; }
.tone-green   { background: rgba(34, 197, 94, 0.2);  color: #4ade80; }
.tone-yellow  { background: rgba(234, 179, 8, 0.2);  color: #facc15; }
.tone-cyan    { background: rgba(6, 182, 212, 0.2);  color: #22d3ee; }
.tone-red     { background: rgba(239, 68, 68, 0.2);  color: #f87171; }
.tone-emerald { background: rgba(16, 185, 129, 0.2); color: #34d399; }
.tone-gray    { background: rgba(107, 114, 128, 0.2); color: #9ca3af; }

/* === Cards === */
.card {
  height: 100%;
  border-radius: var(--radius);
  background: var(--card);
  backdrop-filter: blur(4px);
  border: 1px solid rgba(34, 197, 94, 0.2);
  overflow: hidden;
  transition: border-color var(--transition-normal), transform var(--transition-normal);
}
.card:hover { border-color: rgba(34, 197, 94, 0.4); }

.card.card-accent {
  height: auto;
  background: linear-gradient(to right, rgba(5, 46, 22, 0.2), rgba(20, 83, 45, 0.1));
  border-color: rgba(34, 197, 94, 0.3);
}

.card-header { padding: 1.5rem 1.5rem 0.75rem; }
.card-content { padding: 0 1.5rem 1.5rem; }
.card-title { font-size: var(--text-lg); font-weight: 600; line-height: 1.3; }
.accent-title { display: flex; align-items: center; gap: 0.5rem; color: var(--green-400); }

.hover-lift:hover { transform: scale(1.02); }
.clickable { cursor: pointer; }

.tile {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: var(--surface);
  transition: background var(--transition-fast);
}
.tile:hover { background: var(--surface-hover); }

/* === Sections === */
.page { padding-top: 0; }

.section { padding: 5rem 0; }
.section-fade-down { background: linear-gradient(to bottom, var(--background), rgba(5, 46, 22, 0.05)); }
.section-fade-up { background: linear-gradient(to bottom, rgba(5, 46, 22, 0.05), var(--background)); }

.section-heading {
  text-align: center;
  margin-bottom: 3rem;
  animation: fade-up 0.8s ease both;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  margin-bottom: 1rem;
  background: linear-gradient(to right, var(--heading-from), var(--green-400));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}
.section-title.small-title { font-size: var(--text-2xl); }

.section-subtitle {
  color: var(--muted-foreground);
  font-size: var(--text-lg);
  max-width: 42rem;
  margin: 0 auto;
}

@media (min-width: 768px) {
  .section-title { font-size: var(--text-4xl); }
  .section-title.small-title { font-size: var(--text-2xl); }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
  background: linear-gradient(to bottom right, var(--background), var(--background), rgba(5, 46, 22, 0.2));
}

.hero-bg { position: absolute; inset: 0; }
.hero-glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(to right, rgba(22, 163, 74, 0.1), transparent, rgba(74, 222, 128, 0.1));
}

.particles { position: absolute; inset: 0; overflow: hidden; }
.particle {
  position: absolute;
  top: 0;
  left: 0;
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: rgba(74, 222, 128, 0.3);
  transform: translate(var(--from-x), var(--from-y));
  animation-name: drift;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
  animation-direction: alternate;
}

.hero-content {
  position: relative;
  z-index: 10;
  max-width: 56rem;
  padding-top: 8rem;
  padding-bottom: 4rem;
  text-align: center;
}

.hero-pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  margin-bottom: 1.5rem;
  border-radius: 9999px;
  background: rgba(34, 197, 94, 0.1);
  border: 1px solid rgba(34, 197, 94, 0.2);
  color: var(--green-400);
}

.hero-title {
  font-size: var(--text-4xl);
  font-weight: 700;
  line-height: 1.1;
  margin: 1.5rem 0;
  background: linear-gradient(to right, var(--heading-from), #dcfce7, var(--green-400));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

@media (min-width: 768px) {
  .hero-title { font-size: var(--text-6xl); }
}

.hero-copy {
  font-size: var(--text-lg);
  color: var(--muted-foreground);
  max-width: 42rem;
  margin: 0 auto 2rem;
}

.hero-actions {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
  justify-content: center;
}

@media (min-width: 640px) {
  .hero-actions { flex-direction: row; }
}

.hero-stats {
  margin: 4rem auto 0;
  max-width: 48rem;
  display: grid;
  gap: 2rem;
  grid-template-columns: 1fr;
}

@media (min-width: 768px) {
  .hero-stats { grid-template-columns: repeat(3, 1fr); }
}

.hero-stat { text-align: center; }
.hero-stat-value { font-size: var(--text-3xl); font-weight: 700; color: var(--green-400); }

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  width: 1.5rem;
  height: 2.5rem;
  border: 2px solid rgba(74, 222, 128, 0.5);
  border-radius: 9999px;
  display: flex;
  justify-content: center;
  animation: fade-in 0.5s ease 1.5s both, bob 2s ease-in-out infinite;
}
.scroll-dot {
  width: 0.25rem;
  height: 0.75rem;
  margin-top: 0.5rem;
  border-radius: 9999px;
  background: var(--green-400);
  animation: bob 2s ease-in-out infinite;
}

/* === Market Cards === */
.coin-glyph {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  background: linear-gradient(to right, var(--green-500), var(--green-600));
  display: flex;
  align-items: center;
  justify-content: center;
  color: #fff;
}

.star { color: var(--muted-foreground); cursor: pointer; display: inline-flex; }
.star:hover { color: #facc15; }

.price { font-size: var(--text-2xl); font-weight: 700; }
.stats { margin: 0.75rem 0 0; gap: 1rem; }

/* === Educational === */
.topic-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #fff;
  transition: transform var(--transition-normal);
}
.card:hover .topic-icon { transform: scale(1.1); }

.topic-more {
  max-height: 0;
  overflow: hidden;
  transition: max-height var(--transition-normal);
}
.topic-more.open { max-height: 10rem; }
.topic-more p {
  padding-top: 1rem;
  margin-top: 1rem;
  border-top: 1px solid var(--border);
}

.glossary-search { max-width: 28rem; margin: 1rem auto 0; }

.glossary-entry {
  flex-direction: column;
  align-items: flex-start;
  gap: 0.5rem;
  padding: 1rem;
  animation: fade-up 0.3s ease both;
}

.empty-state {
  text-align: center;
  padding: 2rem 0;
  color: var(--muted-foreground);
}

/* === News === */
.article-cover {
  aspect-ratio: 16 / 9;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--green-400);
  background: linear-gradient(to right, rgba(22, 163, 74, 0.2), rgba(74, 222, 128, 0.2));
}

.article:hover .article-title { color: var(--green-400); }
.article-title { margin-top: 0.5rem; transition: color var(--transition-fast); }

.blog-row { padding: 1rem; gap: 1rem; flex-wrap: wrap; }
.blog-row.featured { border: 1px solid rgba(34, 197, 94, 0.3); }
.blog-body { flex: 1; display: flex; flex-direction: column; gap: 0.5rem; }
.blog-title { font-size: var(--text-lg); font-weight: 600; transition: color var(--transition-fast); }
.blog-title:hover { color: var(--green-400); }

/* === Footer === */
.site-footer {
  padding: 4rem 0;
  border-top: 1px solid rgba(34, 197, 94, 0.2);
  background: linear-gradient(to top, rgba(5, 46, 22, 0.1), var(--background));
}

.newsletter {
  padding: 2rem;
  margin-bottom: 4rem;
  text-align: center;
}
.newsletter-copy { max-width: 28rem; margin: 0 auto 1.5rem; }

.newsletter-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  max-width: 28rem;
  margin: 0 auto;
}

@media (min-width: 640px) {
  .newsletter-form { flex-direction: row; }
}

.footer-grid {
  display: grid;
  gap: 2rem;
  grid-template-columns: 1fr;
  margin-bottom: 3rem;
}

@media (min-width: 768px) {
  .footer-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .footer-grid { grid-template-columns: repeat(6, 1fr); }
  .footer-brand { grid-column: span 2; }
}

.footer-brand { display: flex; flex-direction: column; gap: 1rem; }

.social-link {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  background: var(--surface);
  color: var(--muted-foreground);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: color var(--transition-fast), transform var(--transition-fast);
}
.social-link:hover { color: var(--foreground); transform: scale(1.1); }

.footer-column h4 { font-weight: 600; margin-bottom: 1rem; }
.footer-column ul { display: flex; flex-direction: column; gap: 0.5rem; }

.footer-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--muted-foreground);
  transition: color var(--transition-fast);
}
.footer-link:hover { color: var(--foreground); }
.footer-link .reveal { opacity: 0; transition: opacity var(--transition-fast); }
.footer-link:hover .reveal { opacity: 1; }

.footer-bottom {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
  justify-content: space-between;
  padding-top: 2rem;
  border-top: 1px solid rgba(34, 197, 94, 0.2);
}

@media (min-width: 768px) {
  .footer-bottom { flex-direction: row; }
}

.live { color: var(--green-400); }
.pulse-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--green-400);
  animation: pulse 2s ease-in-out infinite;
}

/* === Toasts === */
.toaster {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: 22rem;
  max-width: calc(100vw - 2rem);
}

.toast {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 0.875rem 1rem;
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
  animation: slide-in-right 0.25s ease both;
}

.toaster-dark .toast-success  { background: #022c22; color: #6ee7b7; border: 1px solid #064e3b; }
.toaster-light .toast-success { background: #ecfdf5; color: #047857; border: 1px solid #a7f3d0; }
.toaster-dark .toast-error    { background: #2d0a0a; color: #fca5a5; border: 1px solid #7f1d1d; }
.toaster-light .toast-error   { background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; }
.toaster-dark .toast-info     { background: #0c1a2e; color: #93c5fd; border: 1px solid #1e3a8a; }
.toaster-light .toast-info    { background: #eff6ff; color: #1d4ed8; border: 1px solid #bfdbfe; }

/* === Entrance Animations === */
.fade-up { animation: fade-up 0.8s ease both; }
.delay-1 { animation-delay: 0.2s; }
.delay-2 { animation-delay: 0.4s; }
.delay-3 { animation-delay: 0.6s; }
.delay-4 { animation-delay: 0.8s; }

@keyframes fade-up {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-down {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in-right {
  from { opacity: 0; transform: translateX(50px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes drift {
  from { transform: translate(var(--from-x), var(--from-y)); }
  to { transform: translate(var(--to-x), var(--to-y)); }
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(10px); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
