//! Global CSS styles for the card.
//!
//! Envelope, letter and snow animations. Timings here must line up with
//! the reveal and collapse delays in `lovenote_core::envelope`.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Great+Vibes&family=Playfair+Display:ital,wght@0,400;0,700;1,400&display=swap');

/* === CSS Custom Properties === */
:root {
  /* WINE (Background, Envelope) */
  --wine-dark: #450a0a;
  --wine: #7f1d1d;
  --envelope-back: #b91c1c;
  --envelope-fold: rgba(220, 38, 38, 0.9);
  --envelope-flap: #991b1b;

  /* PAPER */
  --paper: #fafaf9;
  --paper-shade: #f5f5f4;
  --paper-line: #e7e5e4;

  /* GOLD (Seal, Title) */
  --gold: #ca8a04;
  --gold-light: #facc15;
  --gold-pale: #fef9c3;

  /* TEXT */
  --ink: #44403c;
  --ink-red: #7f1d1d;
  --text-muted: #a8a29e;

  /* Typography */
  --font-handwriting: 'Great Vibes', 'Brush Script MT', cursive;
  --font-display: 'Playfair Display', Georgia, serif;
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-envelope: 0.7s ease-in-out;
  --transition-flap: 0.6s ease-in-out;
  --transition-fade: 0.5s ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-display);
  color: var(--ink);
  overflow: hidden;
}

/* === Page === */
.card-page {
  position: relative;
  min-height: 100vh;
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: linear-gradient(to bottom, var(--wine), var(--wine-dark));
}

.card-stage {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  max-width: 28rem;
  padding: 1rem;
}

.card-title {
  font-family: var(--font-handwriting);
  font-size: 2.5rem;
  font-weight: 400;
  color: var(--gold-pale);
  text-align: center;
  margin-bottom: 3rem;
  text-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
  word-spacing: 0.3em;
  transition: opacity var(--transition-fade);
}

.card-title.faded {
  opacity: 0;
}

.card-footer {
  position: absolute;
  bottom: 1rem;
  font-family: var(--font-sans);
  font-size: 0.75rem;
  color: rgba(254, 202, 202, 0.4);
}

/* === Snow === */
.snow-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

@keyframes snowfall {
  0% { transform: translateY(-10vh) translateX(0); opacity: 1; }
  100% { transform: translateY(110vh) translateX(20px); opacity: 0; }
}

.snowflake {
  position: absolute;
  top: -10px;
  color: white;
  opacity: 0.8;
  animation-name: snowfall;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

/* === Buttons === */
.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: none;
  background: transparent;
  cursor: pointer;
}

.btn-glass {
  padding: 0.75rem;
  border-radius: 9999px;
  color: white;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(12px);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
  transition: background 150ms ease;
}

.btn-glass:hover {
  background: rgba(255, 255, 255, 0.2);
}

.btn-ghost {
  color: var(--text-muted);
  transition: color 150ms ease;
}

.btn-ghost:hover {
  color: var(--ink-red);
}

.music-control {
  position: absolute;
  top: 1.5rem;
  right: 1.5rem;
  z-index: 50;
}

/* === Envelope === */
.envelope {
  position: relative;
  width: 18rem;
  height: 12rem;
  cursor: pointer;
  perspective: 1000px;
  transition: transform var(--transition-envelope);
}

.envelope:hover {
  transform: scale(1.05);
}

.envelope.open {
  transform: translateY(8rem) scale(1.1);
  cursor: default;
}

.envelope-back {
  position: absolute;
  inset: 0;
  background: var(--envelope-back);
  border: 2px solid var(--envelope-flap);
  border-radius: 0.5rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
}

.envelope-letter {
  position: absolute;
  left: 0.5rem;
  right: 0.5rem;
  top: 0.5rem;
  height: 11rem;
  background: var(--paper-shade);
  border-radius: 0.25rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  transition: transform 0.8s ease-in-out, height var(--transition-envelope), opacity 0.5s;
}

.envelope-letter.open {
  transform: translateY(-6rem);
  height: 16rem;
  z-index: 20;
}

.envelope-letter-lines {
  padding: 1rem;
  opacity: 0.5;
}

.envelope-letter-lines .line {
  height: 0.5rem;
  margin-bottom: 0.5rem;
  background: var(--paper-line);
  border-radius: 0.25rem;
}

.line.full { width: 100%; }
.line.two-thirds { width: 66%; }
.line.three-quarters { width: 75%; margin-bottom: 0; }

.envelope-folds {
  position: absolute;
  inset: 0;
  z-index: 10;
  overflow: hidden;
  border-radius: 0.5rem;
  pointer-events: none;
}

.fold {
  position: absolute;
  bottom: 0;
  width: 0;
  height: 0;
  border-bottom: 96px solid var(--envelope-fold);
}

.fold.left {
  left: 0;
  border-left: 144px solid transparent;
}

.fold.right {
  right: 0;
  border-right: 144px solid transparent;
}

.envelope-flap {
  position: absolute;
  top: 0;
  left: 0;
  width: 0;
  height: 0;
  z-index: 20;
  border-left: 144px solid transparent;
  border-right: 144px solid transparent;
  border-top: 100px solid var(--envelope-flap);
  transform-origin: top;
  transform-style: preserve-3d;
  transition: transform var(--transition-flap), z-index var(--transition-flap);
}

.envelope-flap.open {
  transform: rotateX(180deg);
  z-index: 0;
}

.wax-seal {
  position: absolute;
  top: -60px;
  left: -20px;
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: var(--gold);
  border: 2px solid var(--gold-light);
  color: var(--gold-pale);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.25);
}

/* === Letter Modal === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes zoom-in {
  from { opacity: 0; transform: scale(0.95) rotate(1deg); }
  to { opacity: 1; transform: scale(1) rotate(1deg); }
}

.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
  animation: fade-in 0.5s ease both;
}

.letter-paper {
  position: relative;
  width: 100%;
  max-width: 32rem;
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--paper);
  border-radius: 2px;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
  transform: rotate(1deg);
  animation: zoom-in 0.5s ease both;
}

.letter-paper::-webkit-scrollbar { width: 6px; }
.letter-paper::-webkit-scrollbar-track { background: transparent; }
.letter-paper::-webkit-scrollbar-thumb {
  background-color: rgba(153, 27, 27, 0.2);
  border-radius: 10px;
}
.letter-paper::-webkit-scrollbar-thumb:hover {
  background-color: rgba(153, 27, 27, 0.4);
}

.paper-texture {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  pointer-events: none;
  background-image: radial-gradient(rgba(120, 113, 108, 0.4) 1px, transparent 1px);
  background-size: 4px 4px;
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 20;
}

.letter-content {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 1.5rem;
  width: 100%;
}

.photo-frame {
  width: 100%;
  height: 16rem;
  flex-shrink: 0;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--paper-line);
  border: 8px solid white;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.15);
  transform: rotate(-2deg);
}

.photo {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.photo-placeholder {
  font-family: var(--font-handwriting);
  font-size: 2rem;
  color: var(--text-muted);
}

.letter-text {
  width: 100%;
  padding: 0 0.5rem;
}

.letter-salutation {
  font-family: var(--font-handwriting);
  font-size: 2.25rem;
  font-weight: 400;
  color: var(--ink-red);
  margin-bottom: 1rem;
}

.letter-body {
  font-family: var(--font-display);
  font-size: 0.875rem;
  line-height: 1.7;
  color: var(--ink);
}

.letter-body p + p {
  margin-top: 1.25rem;
}

.letter-signature {
  font-family: var(--font-handwriting);
  font-size: 1.5rem;
  color: #991b1b;
  padding-top: 1rem;
}

.letter-ornament {
  padding-top: 1.5rem;
  color: rgba(202, 138, 4, 0.5);
}
"#;
