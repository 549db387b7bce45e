/// (key, English, Chinese)
pub(super) const TRANSLATIONS: &[(&str, &str, &str)] = &[
    // Page titles
    ("main-title", "Table Tennis Whole-History Rating (WHR)", "乒乓球全历史等级分（WHR）"),
    ("player-title", "Player Profile | Table Tennis WHR", "选手档案 | 乒乓球WHR"),
    ("history-title", "Ranking History | Table Tennis WHR", "历史排名 | 乒乓球WHR"),
    ("snapshot-title", "Ranking Snapshot | Table Tennis WHR", "排名快照 | 乒乓球WHR"),
    // Navigation
    ("nav-rankings", "Current Rankings", "当前排名"),
    ("nav-history", "Ranking History", "历史排名"),
    // Header info
    ("last-data", "Last data retrieved:", "数据获取时间："),
    ("last-ranking", "Last ranking updated:", "排名更新时间："),
    ("beijing-time", "(Beijing Time, UTC+8)", "（北京时间，UTC+8）"),
    // Tabs
    ("men-singles", "Men's Singles", "男子单打"),
    ("women-singles", "Women's Singles", "女子单打"),
    // Table headers
    ("rank", "Rank", "排名"),
    ("player", "Player", "姓名"),
    ("year-of-birth", "Year of Birth", "出生年份"),
    ("association", "Association", "协会"),
    ("rating", "Rating", "等级分"),
    ("error", "Error", "误差"),
    ("date", "Date", "日期"),
    ("eval-date", "Evaluation Date", "评估日期"),
    ("rank-1", "1st", "第一名"),
    ("rank-2", "2nd", "第二名"),
    ("rank-3", "3rd", "第三名"),
    ("rank-4", "4th", "第四名"),
    ("rank-5", "5th", "第五名"),
    // Snapshot page
    ("snapshot-for", "Rankings as of", "排名日期："),
    ("back-to-history", "Back to History", "返回历史排名"),
    // Player page
    ("back-to-rankings", "Back to Rankings", "返回排名"),
    ("id", "ITTF ID:", "国际乒联ID："),
    ("yob", "Year of Birth:", "出生年份："),
    ("assoc", "Association:", "协会："),
    ("gender", "Gender:", "性别："),
    ("current-rating", "Current Rating:", "当前等级分："),
    ("rating-history", "Rating History", "等级分历史"),
    ("date-intervals", "*Note: date intervals not to scale", "*注意：日期间隔未按比例显示"),
    ("ci-upper", "95% CI UB", "95%置信上限"),
    ("ci-lower", "95% CI LB", "95%置信下限"),
    // Gender values
    ("male", "Male", "男"),
    ("female", "Female", "女"),
    // Footer
    ("match-data", "Match data from ", "比赛数据来自"),
    ("match-ittf", "International Table Tennis Federation (ITTF)", "国际乒乓球联合会（ITTF）"),
    ("whr-algorithm", "WHR algorithm credited to", "WHR算法原作者："),
    ("copyright", "© 2025 Table Tennis Whole-History Rating (WHR)", "© 2025 乒乓球全历史等级分（WHR）"),
    // Page messages
    ("no-player-id", "No player ID provided", "未提供球员ID"),
    ("failed-load", "Failed to load player data", "加载球员数据失败"),
    ("error-loading", "Error loading player data. Please try again later.", "加载球员数据时出错。请稍后再试。"),
    ("no-data", "No data available", "无可用数据"),
    ("not-available", "Not available", "暂无"),
    ("no-rating-history", "No rating history available", "无等级分历史"),
    ("no-ranking-data", "No ranking data available.", "无可用排名数据。"),
    ("error-loading-rankings", "Error loading rankings. Please try again later.", "加载排名时出错。请稍后再试。"),
    ("no-history-data", "No historical ranking data available.", "无历史排名数据。"),
    ("error-loading-history", "Error loading ranking history. Please try again later.", "加载历史排名时出错。请稍后再试。"),
    ("no-snapshot-data", "No ranking data available for this date.", "该日期无排名数据。"),
    ("error-loading-snapshot", "Error loading ranking snapshot. Please try again later.", "加载排名快照时出错。请稍后再试。"),
    ("no-date-provided", "No date provided", "未提供日期"),
    ("unknown", "Unknown", "未知"),
    // Language switcher
    ("switch-language", "中文", "English"),
    // Endpoint messages
    ("invalid_id", "Invalid player ID", "无效的球员ID"),
    ("player_not_found", "Player not found", "未找到球员"),
    ("invalid_date", "Invalid date format", "无效的日期格式"),
    ("date_not_found", "No data available for this date", "没有该日期的数据"),
    ("db_error", "Database error: ", "数据库错误："),
];
