pub mod career_plan_form;
pub mod feedback_panel;
pub mod layout;
pub mod radar_chart;
