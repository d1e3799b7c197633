mod load_roster;
mod load_roster_page;
