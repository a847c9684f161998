//! Global CSS styles for the portfolio.
//!
//! Palette variables come from [`super::palette_css`]; everything else is
//! declared here. Animated properties (transform, opacity, filter,
//! clip-path) are written inline by the motion code, so rules below only set
//! resting layout and the non-animated look.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Fonts */
  --font-display: "Anton", "Oswald", "Arial Narrow", sans-serif;
  --font-body: "Inter", "Helvetica Neue", Arial, sans-serif;

  /* Spacing */
  --space-xs: 0.5rem;
  --space-sm: 1rem;
  --space-md: 2rem;
  --space-lg: 4rem;
  --space-xl: 8rem;
  --gutter: clamp(1.25rem, 4vw, 4rem);

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 2rem;
  --text-display: clamp(4rem, 14vw, 14rem);

  /* Easing */
  --ease-out-expo: cubic-bezier(0.16, 1, 0.3, 1);
  --ease-in-out-expo: cubic-bezier(0.87, 0, 0.13, 1);
  --transition-fast: 200ms var(--ease-out-expo);
  --transition-slow: 800ms var(--ease-in-out-expo);

  /* Layers */
  --z-grid: 0;
  --z-content: 1;
  --z-menu: 50;
  --z-header: 60;
  --z-noise: 80;
  --z-preloader: 90;
  --z-cursor: 100;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--ink);
  color: var(--bone);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

body.has-custom-cursor,
body.has-custom-cursor a,
body.has-custom-cursor button {
  cursor: none;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

img {
  display: block;
  max-width: 100%;
}

::selection {
  background: var(--ember);
  color: var(--ink);
}

/* === Typography === */
.section-kicker {
  display: inline-block;
  font-size: var(--text-xs);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--bone-muted);
}

.section-heading {
  display: flex;
  align-items: baseline;
  gap: var(--space-sm);
  padding: 0 var(--gutter);
  margin-bottom: var(--space-lg);
}

.section-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 7rem);
  font-weight: 400;
  line-height: 0.95;
  text-transform: uppercase;
}

.section-count {
  margin-left: auto;
  font-family: var(--font-display);
  font-size: var(--text-xl);
  color: var(--ember);
}

/* === Decorative Layers === */
.svg-defs {
  position: absolute;
  width: 0;
  height: 0;
  overflow: hidden;
}

.noise-overlay {
  position: fixed;
  inset: -50%;
  z-index: var(--z-noise);
  pointer-events: none;
  opacity: 0.06;
  background-image: url("data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='160' height='160'><filter id='n'><feTurbulence type='fractalNoise' baseFrequency='0.85' numOctaves='3' stitchTiles='stitch'/></filter><rect width='100%' height='100%' filter='url(%23n)'/></svg>");
  animation: grain 8s steps(10) infinite;
}

@keyframes grain {
  0%, 100% { transform: translate(0, 0); }
  20% { transform: translate(-5%, 4%); }
  40% { transform: translate(3%, -6%); }
  60% { transform: translate(-7%, -2%); }
  80% { transform: translate(6%, 5%); }
}

.gradient-blobs {
  position: fixed;
  inset: 0;
  z-index: var(--z-grid);
  pointer-events: none;
  overflow: hidden;
}

.gradient-blob {
  position: absolute;
  width: 40vw;
  height: 40vw;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.22;
  background: radial-gradient(circle, var(--ember) 0%, transparent 70%);
  top: calc(var(--blob-index) * 30%);
  left: calc(var(--blob-index) * 28% - 10%);
  animation: drift 24s ease-in-out infinite alternate;
  animation-delay: calc(var(--blob-index) * -6s);
}

@keyframes drift {
  from { transform: translate(0, 0) scale(1); }
  to { transform: translate(8vw, -6vh) scale(1.15); }
}

.grid-background {
  position: fixed;
  inset: 0 var(--gutter);
  z-index: var(--z-grid);
  display: grid;
  grid-template-columns: repeat(var(--grid-columns), 1fr);
  pointer-events: none;
}

.grid-column {
  border-left: 1px solid var(--ink-line);
  opacity: 0.4;
}

.grid-column:last-child {
  border-right: 1px solid var(--ink-line);
}

/* === Custom Cursor === */
.cursor-dot,
.cursor-ring {
  position: fixed;
  top: 0;
  left: 0;
  z-index: var(--z-cursor);
  pointer-events: none;
  border-radius: 50%;
  display: none;
  will-change: transform;
}

body.has-custom-cursor .cursor-dot,
body.has-custom-cursor .cursor-ring {
  display: block;
}

.cursor-dot {
  width: 8px;
  height: 8px;
  background: var(--ember);
}

.cursor-ring {
  width: 40px;
  height: 40px;
  border: 1px solid var(--bone);
}

/* === Preloader === */
.preloader {
  position: fixed;
  inset: 0;
  z-index: var(--z-preloader);
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: var(--gutter);
  background: var(--ink-raised);
  transition: transform var(--transition-slow);
}

.preloader.is-exiting {
  transform: translateY(-100%);
}

.preloader-inner {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
}

.preloader-name {
  font-size: var(--text-sm);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--bone-muted);
}

.preloader-count {
  font-family: var(--font-display);
  font-size: clamp(5rem, 18vw, 16rem);
  line-height: 0.85;
  font-variant-numeric: tabular-nums;
}

.preloader-bar {
  height: 2px;
  margin-top: var(--space-sm);
  background: var(--ink-line);
  overflow: hidden;
}

.preloader-bar-fill {
  display: block;
  height: 100%;
  background: var(--ember);
  transform-origin: left center;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: var(--z-header);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-md) var(--gutter);
  mix-blend-mode: difference;
  transition: padding var(--transition-fast);
}

.site-header.scrolled {
  padding-top: var(--space-sm);
  padding-bottom: var(--space-sm);
}

.brand {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  text-transform: uppercase;
  letter-spacing: 0.04em;
}

.desktop-nav {
  display: flex;
  gap: var(--space-md);
}

.magnetic {
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.magnetic-inner {
  display: inline-flex;
  align-items: center;
  gap: var(--space-xs);
  will-change: transform;
}

.nav-link {
  padding: var(--space-xs);
  font-size: var(--text-sm);
  letter-spacing: 0.12em;
  text-transform: uppercase;
}

.nav-link:hover {
  color: var(--ember);
}

.menu-toggle {
  display: none;
  flex-direction: column;
  gap: 6px;
  width: 32px;
  padding: 6px 0;
}

.menu-toggle-bar {
  display: block;
  height: 2px;
  background: var(--bone);
  transition: transform var(--transition-fast);
}

.menu-toggle.is-open .menu-toggle-bar:first-child {
  transform: translateY(4px) rotate(45deg);
}

.menu-toggle.is-open .menu-toggle-bar:last-child {
  transform: translateY(-4px) rotate(-45deg);
}

/* === Mobile Menu === */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: var(--z-menu);
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  padding: calc(var(--space-xl) + var(--space-sm)) var(--gutter) var(--gutter);
  background: var(--ember);
  color: var(--ink);
  animation: menu-in 600ms var(--ease-out-expo) both;
}

@keyframes menu-in {
  from { clip-path: inset(0 0 100% 0); }
  to { clip-path: inset(0 0 0 0); }
}

.mobile-menu-nav {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: var(--space-xs);
}

.mobile-menu-link {
  font-family: var(--font-display);
  font-size: clamp(3rem, 16vw, 6rem);
  line-height: 1;
  text-transform: uppercase;
  animation: link-in 700ms var(--ease-out-expo) both;
  animation-delay: calc(150ms + var(--item-index) * 70ms);
}

@keyframes link-in {
  from { transform: translateY(60%); opacity: 0; }
  to { transform: none; opacity: 1; }
}

.mobile-menu-footer {
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.mobile-menu-email {
  font-size: var(--text-lg);
  text-decoration: underline;
}

/* === Page === */
.page {
  position: relative;
  z-index: var(--z-content);
}

.page.is-loading {
  height: 100vh;
  overflow: hidden;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: flex-end;
  padding: var(--space-xl) var(--gutter) var(--space-lg);
  overflow: hidden;
}

.hero-media {
  position: absolute;
  top: 12vh;
  right: var(--gutter);
  width: min(38vw, 520px);
  aspect-ratio: 4 / 5;
  overflow: hidden;
  will-change: transform, clip-path;
}

.hero-media-inner {
  position: absolute;
  inset: -15% 0;
  will-change: transform;
}

.hero-media-inner img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(0.35) contrast(1.05);
}

.hero-text {
  position: relative;
  will-change: transform, opacity, filter;
}

.hero-eyebrow {
  font-size: var(--text-xs);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--bone-muted);
  margin-bottom: var(--space-sm);
}

.hero-title {
  font-family: var(--font-display);
  font-size: var(--text-display);
  font-weight: 400;
  line-height: 0.86;
  text-transform: uppercase;
}

.hero-line-mask {
  display: block;
  overflow: hidden;
  padding-bottom: 0.04em;
}

.hero-line {
  display: block;
  transform-origin: left bottom;
}

.hero-line-mask:nth-child(2) .hero-line {
  color: var(--ember);
}

.hero-tagline {
  max-width: 32rem;
  margin-top: var(--space-md);
  font-size: var(--text-lg);
  color: var(--bone-muted);
}

.hero-scroll-cue {
  position: absolute;
  bottom: var(--space-md);
  right: var(--gutter);
  font-size: var(--text-xs);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  writing-mode: vertical-rl;
  color: var(--bone-muted);
}

/* === Services === */
.services {
  position: relative;
  padding: var(--space-xl) 0;
}

.service-list {
  padding: 0 var(--gutter);
}

.service-row {
  position: relative;
  display: grid;
  grid-template-columns: 6rem 1fr 1fr;
  gap: var(--space-md);
  align-items: baseline;
  padding: var(--space-md) 0;
  transition: color var(--transition-fast);
}

.service-row:hover {
  color: var(--ember);
}

.service-rule-track {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 1px;
  overflow: hidden;
}

.service-rule {
  display: block;
  height: 100%;
  background: var(--bone-muted);
}

.service-index {
  font-size: var(--text-sm);
  color: var(--bone-muted);
}

.service-name {
  font-family: var(--font-display);
  font-size: clamp(2rem, 4.5vw, 4rem);
  font-weight: 400;
  text-transform: uppercase;
  line-height: 1;
}

.service-description {
  color: var(--bone-muted);
  max-width: 28rem;
}

/* === Philosophy Ticker === */
.philosophy {
  position: relative;
  height: 300vh;
}

.philosophy-pin {
  position: sticky;
  top: 0;
  height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  overflow: hidden;
}

.philosophy-kicker {
  position: absolute;
  top: var(--space-xl);
  left: var(--gutter);
}

.philosophy-track {
  position: relative;
  display: flex;
  align-items: center;
  gap: var(--space-lg);
  width: max-content;
  padding: 0 var(--gutter) 0 100vw;
  will-change: transform;
}

.ticker-item {
  display: inline-block;
  white-space: nowrap;
}

.ticker-text {
  font-family: var(--font-display);
  font-size: clamp(5rem, 16vw, 15rem);
  line-height: 1;
  text-transform: uppercase;
}

.ticker-glyph {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: clamp(5rem, 10vw, 9rem);
  height: clamp(5rem, 10vw, 9rem);
  border: 1px solid var(--bone-muted);
  border-radius: 50%;
  font-size: clamp(2rem, 4vw, 3.5rem);
  color: var(--ember);
}

.ticker-highlight {
  color: transparent;
  -webkit-text-stroke: 1px var(--bone);
  transition: color 600ms var(--ease-out-expo), -webkit-text-stroke-color 600ms var(--ease-out-expo);
}

.ticker-highlight.is-lit {
  color: var(--ember);
  -webkit-text-stroke-color: var(--ember);
}

.philosophy.is-static {
  height: auto;
  padding: var(--space-xl) 0;
}

.philosophy.is-static .philosophy-pin {
  position: relative;
  height: auto;
}

.philosophy.is-static .philosophy-kicker {
  position: static;
  margin: 0 var(--gutter) var(--space-md);
}

.philosophy.is-static .philosophy-track {
  flex-wrap: wrap;
  width: auto;
  padding: 0 var(--gutter);
}

.philosophy.is-static .ticker-highlight {
  color: var(--ember);
  -webkit-text-stroke-color: var(--ember);
}

/* === Projects === */
.projects {
  position: relative;
  padding: var(--space-xl) 0;
}

.project-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-xl);
  padding: 0 var(--gutter);
}

.project-link {
  display: grid;
  grid-template-columns: 1.4fr 1fr;
  gap: var(--space-lg);
  align-items: end;
}

.project-row:nth-child(even) .project-link {
  grid-template-columns: 1fr 1.4fr;
}

.project-row:nth-child(even) .project-media {
  order: 2;
}

.project-media {
  aspect-ratio: 16 / 10;
  overflow: hidden;
}

.project-image {
  width: 100%;
  height: 100%;
  will-change: transform;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: filter var(--transition-slow);
  filter: grayscale(0.6);
}

.project-link:hover .project-image img {
  filter: grayscale(0);
}

.project-info {
  display: flex;
  flex-direction: column;
  gap: var(--space-xs);
}

.project-number {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  color: var(--ember);
}

.project-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 5vw, 5rem);
  font-weight: 400;
  line-height: 1;
  text-transform: uppercase;
}

.project-category {
  color: var(--bone-muted);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-xs);
  list-style: none;
  margin-top: var(--space-xs);
}

.project-tag {
  padding: 0.2rem 0.7rem;
  border: 1px solid var(--ink-line);
  border-radius: 999px;
  font-size: var(--text-xs);
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.project-cta {
  display: inline-flex;
  align-items: center;
  gap: var(--space-xs);
  margin-top: var(--space-sm);
  font-size: var(--text-sm);
  letter-spacing: 0.12em;
  text-transform: uppercase;
}

.project-link:hover .project-cta {
  color: var(--ember);
}

/* === Awards Marquee === */
.awards {
  padding: var(--space-lg) 0;
  border-top: 1px solid var(--ink-line);
  border-bottom: 1px solid var(--ink-line);
  overflow: hidden;
}

.marquee {
  overflow: hidden;
}

.marquee-track {
  display: flex;
  width: max-content;
  animation: marquee var(--marquee-duration, 30s) linear infinite;
}

.marquee:hover .marquee-track {
  animation-play-state: paused;
}

@keyframes marquee {
  from { transform: translateX(0); }
  to { transform: translateX(calc(-100% / var(--marquee-copies, 2))); }
}

.marquee-group {
  display: flex;
  flex-shrink: 0;
  list-style: none;
}

.marquee-item {
  display: inline-flex;
  align-items: center;
  gap: var(--space-md);
  padding-right: var(--space-md);
  font-family: var(--font-display);
  font-size: clamp(2rem, 5vw, 4.5rem);
  text-transform: uppercase;
  white-space: nowrap;
}

.marquee-star {
  color: var(--ember);
  font-size: 0.6em;
}

/* === Contact === */
.contact {
  position: relative;
  z-index: var(--z-content);
  display: flex;
  flex-direction: column;
  gap: var(--space-md);
  padding: var(--space-xl) var(--gutter) var(--space-md);
}

.contact-title {
  display: flex;
  flex-direction: column;
  font-family: var(--font-display);
  font-size: clamp(3rem, 9vw, 9rem);
  font-weight: 400;
  line-height: 0.92;
  text-transform: uppercase;
}

.contact-title-accent {
  color: var(--ember);
}

.contact-cta {
  align-self: flex-start;
  padding: var(--space-sm) var(--space-md);
  border: 1px solid var(--bone);
  border-radius: 999px;
  font-size: var(--text-lg);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.contact-cta:hover {
  background: var(--ember);
  border-color: var(--ember);
  color: var(--ink);
}

.contact-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: var(--space-lg);
  padding-top: var(--space-md);
  border-top: 1px solid var(--ink-line);
}

.contact-credit {
  font-size: var(--text-sm);
  color: var(--bone-muted);
}

.social-links {
  display: flex;
  gap: var(--space-sm);
  list-style: none;
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border: 1px solid var(--ink-line);
  border-radius: 50%;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.social-link:hover {
  color: var(--ember);
  border-color: var(--ember);
}

.mobile-menu .social-link {
  border-color: var(--ink);
}

/* === Responsive === */
@media (max-width: 767px) {
  .desktop-nav {
    display: none;
  }

  .menu-toggle {
    display: flex;
  }

  .hero {
    flex-direction: column;
    justify-content: flex-end;
  }

  .hero-media {
    position: relative;
    top: auto;
    right: auto;
    width: 100%;
    margin-bottom: var(--space-md);
  }

  .service-row {
    grid-template-columns: 3rem 1fr;
  }

  .service-description {
    grid-column: 2;
  }

  .project-link,
  .project-row:nth-child(even) .project-link {
    grid-template-columns: 1fr;
  }

  .project-row:nth-child(even) .project-media {
    order: 0;
  }

  .contact-footer {
    flex-direction: column;
    gap: var(--space-md);
    align-items: flex-start;
  }
}

/* === Reduced Motion === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }

  .marquee-track {
    animation: none;
    flex-wrap: wrap;
    width: auto;
  }

  .marquee-group[aria-hidden="true"] {
    display: none;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str) -> u32 {
        let decl = format!("--z-{name}:");
        GLOBAL_STYLES
            .lines()
            .find_map(|line| line.trim().strip_prefix(decl.as_str()))
            .and_then(|value| value.trim().trim_end_matches(';').parse().ok())
            .unwrap_or_else(|| panic!("missing layer {name}"))
    }

    #[test]
    fn header_controls_stay_above_open_menu() {
        assert!(layer("header") > layer("menu"));
        assert!(layer("preloader") > layer("header"));
    }
}
