mod location;
mod roster;
