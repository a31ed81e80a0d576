mod board;
mod draw;
mod names;
mod pin;
mod score;
mod show;
