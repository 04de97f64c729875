mod helpers;
mod test_dashboard;
mod test_regions;
