mod format;
mod tracks;
