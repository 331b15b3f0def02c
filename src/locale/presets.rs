//! Built-in locale preset constructors for Locale.

use super::Locale;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Locale {
    /// Create the United States English locale
    pub fn en_us() -> Self {
        Self {
            code: "en-US".to_string(),
            week_first_day: 0,
            month_before_year: true,
            today_label: "Today".to_string(),
            now_label: "Now".to_string(),
            ok_label: "OK".to_string(),
            clear_label: "Clear".to_string(),
            month_select_label: "Select month".to_string(),
            year_select_label: "Select year".to_string(),
            am_label: "AM".to_string(),
            pm_label: "PM".to_string(),
            short_week_days: strings(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            short_months: strings(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            field_date_format: "MM/DD/YYYY".to_string(),
            field_date_time_format: "MM/DD/YYYY HH:mm:ss".to_string(),
            field_time_format: "HH:mm:ss".to_string(),
            field_week_format: "YYYY-ww".to_string(),
            field_month_format: "YYYY-MM".to_string(),
            field_quarter_format: "YYYY-QQ".to_string(),
            field_year_format: "YYYY".to_string(),
            cell_date_format: "DD".to_string(),
        }
    }

    /// Create the British English locale
    pub fn en_gb() -> Self {
        Self {
            code: "en-GB".to_string(),
            week_first_day: 1,
            month_before_year: false,
            field_date_format: "DD/MM/YYYY".to_string(),
            field_date_time_format: "DD/MM/YYYY HH:mm:ss".to_string(),
            ..Locale::en_us()
        }
    }

    /// Create the German locale
    pub fn de_de() -> Self {
        Self {
            code: "de-DE".to_string(),
            week_first_day: 1,
            month_before_year: false,
            today_label: "Heute".to_string(),
            now_label: "Jetzt".to_string(),
            ok_label: "OK".to_string(),
            clear_label: "Löschen".to_string(),
            month_select_label: "Monat wählen".to_string(),
            year_select_label: "Jahr wählen".to_string(),
            am_label: "AM".to_string(),
            pm_label: "PM".to_string(),
            short_week_days: strings(&["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]),
            short_months: strings(&[
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ]),
            field_date_format: "DD.MM.YYYY".to_string(),
            field_date_time_format: "DD.MM.YYYY HH:mm:ss".to_string(),
            field_time_format: "HH:mm:ss".to_string(),
            field_week_format: "YYYY-ww".to_string(),
            field_month_format: "MM.YYYY".to_string(),
            field_quarter_format: "YYYY-QQ".to_string(),
            field_year_format: "YYYY".to_string(),
            cell_date_format: "DD".to_string(),
        }
    }

    /// Create the French locale
    pub fn fr_fr() -> Self {
        Self {
            code: "fr-FR".to_string(),
            week_first_day: 1,
            month_before_year: false,
            today_label: "Aujourd'hui".to_string(),
            now_label: "Maintenant".to_string(),
            ok_label: "OK".to_string(),
            clear_label: "Effacer".to_string(),
            month_select_label: "Choisir un mois".to_string(),
            year_select_label: "Choisir une année".to_string(),
            am_label: "AM".to_string(),
            pm_label: "PM".to_string(),
            short_week_days: strings(&["dim", "lun", "mar", "mer", "jeu", "ven", "sam"]),
            short_months: strings(&[
                "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct",
                "nov", "déc",
            ]),
            field_date_format: "DD/MM/YYYY".to_string(),
            field_date_time_format: "DD/MM/YYYY HH:mm:ss".to_string(),
            field_time_format: "HH:mm:ss".to_string(),
            field_week_format: "YYYY-ww".to_string(),
            field_month_format: "MM/YYYY".to_string(),
            field_quarter_format: "YYYY-QQ".to_string(),
            field_year_format: "YYYY".to_string(),
            cell_date_format: "DD".to_string(),
        }
    }

    /// Create the Japanese locale
    pub fn ja_jp() -> Self {
        Self {
            code: "ja-JP".to_string(),
            week_first_day: 0,
            month_before_year: false,
            today_label: "今日".to_string(),
            now_label: "現在時刻".to_string(),
            ok_label: "確定".to_string(),
            clear_label: "クリア".to_string(),
            month_select_label: "月を選択".to_string(),
            year_select_label: "年を選択".to_string(),
            am_label: "午前".to_string(),
            pm_label: "午後".to_string(),
            short_week_days: strings(&["日", "月", "火", "水", "木", "金", "土"]),
            short_months: strings(&[
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ]),
            field_date_format: "YYYY/MM/DD".to_string(),
            field_date_time_format: "YYYY/MM/DD HH:mm:ss".to_string(),
            field_time_format: "HH:mm:ss".to_string(),
            field_week_format: "YYYY-ww".to_string(),
            field_month_format: "YYYY/MM".to_string(),
            field_quarter_format: "YYYY-QQ".to_string(),
            field_year_format: "YYYY".to_string(),
            cell_date_format: "DD".to_string(),
        }
    }
}
