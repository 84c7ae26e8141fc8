//! Education, poverty and labour market indicators.

use super::IndicatorGuideEntry;

pub(super) static ENTRIES: [IndicatorGuideEntry; 15] = [
    IndicatorGuideEntry {
        series_name: "Adolescents out of school (% of lower secondary school age)",
        translated_label: "Adolescentes fuera de la escuela (% de la edad de la escuela secundaria inferior)",
        definition: "Porcentaje de adolescentes de edad de secundaria inferior que no asisten a la escuela.",
        purpose: "Medir la exclusión educativa entre adolescentes.",
        importance: "Refleja el acceso y permanencia en la educación secundaria.",
    },
    IndicatorGuideEntry {
        series_name: "Current education expenditure, total (% of total expenditure in public institutions)",
        translated_label: "Gasto actual en educación, total (% del gasto total en instituciones públicas)",
        definition: "Gasto actual en educación como porcentaje del gasto total en instituciones públicas.",
        purpose: "Evaluar la asignación de recursos actuales en educación.",
        importance: "Indica el nivel de apoyo financiero a la educación en instituciones públicas.",
    },
    IndicatorGuideEntry {
        series_name: "Educational attainment, at least Bachelor's or equivalent, population 25+, total (%) (cumulative)",
        translated_label: "Logro educativo, al menos licenciatura o equivalente, población 25+, total (%) (acumulativo)",
        definition: "Porcentaje acumulado de la población de 25 años o más con al menos una licenciatura o equivalente.",
        purpose: "Medir el nivel educativo de la población adulta.",
        importance: "Refleja el nivel educativo avanzado de la población adulta.",
    },
    IndicatorGuideEntry {
        series_name: "Educational attainment, at least completed lower secondary, population 25+, total (%) (cumulative)",
        translated_label: "Logro educativo, al menos secundaria completa, población 25+, total (%) (acumulativo)",
        definition: "Porcentaje acumulado de la población de 25 años o más que ha completado al menos la educación secundaria inferior.",
        purpose: "Medir el logro educativo mínimo de la población adulta.",
        importance: "Indica el nivel mínimo de educación completada por la población adulta.",
    },
    IndicatorGuideEntry {
        series_name: "Government expenditure on education, total (% of GDP)",
        translated_label: "Gasto del gobierno en educación, total (% del PIB)",
        definition: "Total del gasto gubernamental en educación en relación al PIB.",
        purpose: "Evaluar la inversión pública en educación.",
        importance: "Refleja la prioridad del gobierno en el desarrollo educativo.",
    },
    IndicatorGuideEntry {
        series_name: "Government expenditure on education, total (% of government expenditure)",
        translated_label: "Gasto del gobierno en educación, total (% del gasto gubernamental)",
        definition: "Total del gasto gubernamental en educación en relación al gasto total del gobierno.",
        purpose: "Medir la proporción del gasto total del gobierno dedicado a la educación.",
        importance: "Indica el compromiso del gobierno con la educación en su presupuesto total.",
    },
    IndicatorGuideEntry {
        series_name: "Literacy rate, adult total (% of people ages 15 and above)",
        translated_label: "Tasa de alfabetización, total de adultos (% de personas de 15 años y más)",
        definition: "Porcentaje de adultos de 15 años o más que pueden leer y escribir.",
        purpose: "Medir el nivel de alfabetización entre adultos.",
        importance: "Refleja el nivel de alfabetización y educación básica de los adultos.",
    },
    IndicatorGuideEntry {
        series_name: "Poverty headcount ratio at societal poverty line (% of population)",
        translated_label: "Tasa de pobreza según la línea de pobreza social (% de la población)",
        definition: "Porcentaje de la población que vive por debajo de la línea de pobreza social.",
        purpose: "Evaluar la proporción de población en pobreza social.",
        importance: "Indica el nivel de pobreza relativa en la sociedad.",
    },
    IndicatorGuideEntry {
        series_name: "Poverty headcount ratio at national poverty lines (% of population)",
        translated_label: "Tasa de pobreza según las líneas de pobreza nacionales (% de la población)",
        definition: "Porcentaje de la población que vive por debajo de las líneas de pobreza nacionales.",
        purpose: "Medir la proporción de población en pobreza según estándares nacionales.",
        importance: "Refleja la pobreza según estándares locales y sus desafíos.",
    },
    IndicatorGuideEntry {
        series_name: "Poverty headcount ratio at $2.15 a day (2017 PPP) (% of population)",
        translated_label: "Tasa de pobreza según $2.15 al día (2017 PPA) (% de la población)",
        definition: "Porcentaje de la población que vive con menos de $2.15 al día según la PPA de 2017.",
        purpose: "Evaluar la pobreza extrema en la población.",
        importance: "Indica el nivel de pobreza extrema y la calidad de vida.",
    },
    IndicatorGuideEntry {
        series_name: "Multidimensional poverty headcount ratio (World Bank) (% of population)",
        translated_label: "Tasa de pobreza multidimensional (Banco Mundial) (% de la población)",
        definition: "Porcentaje de la población que sufre pobreza multidimensional según el Banco Mundial.",
        purpose: "Medir la proporción de población en pobreza multidimensional.",
        importance: "Refleja múltiples dimensiones de la pobreza más allá del ingreso.",
    },
    IndicatorGuideEntry {
        series_name: "Share of youth not in education, employment or training, total (% of youth population)",
        translated_label: "Proporción de jóvenes que no estudian, ni trabajan, ni reciben formación, total (% de la población juvenil)",
        definition: "Porcentaje de jóvenes que no estudian, ni trabajan, ni reciben formación.",
        purpose: "Evaluar la proporción de jóvenes que no participan en actividades educativas o laborales.",
        importance: "Indica la integración de los jóvenes en el sistema educativo y laboral.",
    },
    IndicatorGuideEntry {
        series_name: "Unemployment, total (% of total labor force) (modeled ILO estimate)",
        translated_label: "Desempleo, total (% de la fuerza laboral total) (estimación OIT modelada)",
        definition: "Porcentaje de la fuerza laboral total que está desempleada según estimación modelada de la OIT.",
        purpose: "Medir la tasa de desempleo total según estimaciones internacionales.",
        importance: "Refleja la salud del mercado laboral según estándares internacionales.",
    },
    IndicatorGuideEntry {
        series_name: "Unemployment, total (% of total labor force) (national estimate)",
        translated_label: "Desempleo, total (% de la fuerza laboral total) (estimación nacional)",
        definition: "Porcentaje de la fuerza laboral total que está desempleada según estimación nacional.",
        purpose: "Medir la tasa de desempleo total según estimaciones nacionales.",
        importance: "Refleja la salud del mercado laboral según estándares nacionales.",
    },
    IndicatorGuideEntry {
        series_name: "Social contributions (% of revenue)",
        translated_label: "Contribuciones sociales (% de los ingresos)",
        definition: "Porcentaje de los ingresos que proviene de contribuciones sociales.",
        purpose: "Evaluar la contribución de las contribuciones sociales a los ingresos totales.",
        importance: "Indica la relevancia de las contribuciones sociales en la financiación pública.",
    },
];
